//! # 图标生成模块（icon_gen）
//!
//! ## 设计思路
//!
//! 将“源图加载 → 渲染 → 落盘 → 清单”按职责拆分为多个子模块，
//! Android 与 iOS 两条链路共用同一套加载、渲染与写入实现。
//!
//! - `service`：命令行入口适配（进度打印、退出码）
//! - `handler`：编排整条生成流程
//! - `loader`：源图存在性检查与解码
//! - `pipeline`：缩放与自适应前景层合成
//! - `writer`：原子写入 PNG / JSON
//! - `manifest`：iOS `Contents.json`
//! - `table/config/error/report`：尺寸表、配置、错误、结果模型
//!
//! ## 调用链
//!
//! ```text
//! bin/generate_*_icons.rs
//!    ↓
//! service.rs（缺失检查 + 控制台输出）
//!    ↓
//! handler.rs（逐条编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 解码，一轮一次）
//!    ├─ pipeline.rs（普通 / 自适应前景渲染）
//!    ├─ writer.rs（临时文件 + rename）
//!    └─ manifest.rs（仅 iOS）
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod manifest;
pub mod pipeline;
mod report;
pub mod service;
mod table;
pub mod writer;

pub use config::{GeneratorConfig, DEFAULT_ADAPTIVE_LOGO_RATIO, DEFAULT_SOURCE_IMAGE};
pub use error::IconError;
pub use handler::IconGenerator;
pub use loader::SourceImage;
pub use manifest::{ManifestDocument, ManifestImage, ManifestInfo};
pub use report::{GeneratedIcon, GenerationReport, IconFailure};
pub use service::{run_android, run_ios, RunStatus};
pub use table::{
    AndroidIconSpec, IconMode, IosIconSpec, ANDROID_ICONS, IOS_ICONSET_DIR, IOS_ICONS,
    IOS_MANIFEST_FILE,
};
