//! # 移动端应用图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌───────────────────────────────┐   ┌───────────────────────────────┐
//! │  generate_android_icons (bin) │   │   generate_ios_icons (bin)    │
//! └───────────────┬───────────────┘   └───────────────┬───────────────┘
//!                 ↓                                   ↓
//! ┌───────────────────────────────────────────────────────────────────┐
//! │ icon_gen                                                          │
//! │                                                                   │
//! │  service ── 缺失检查 / 进度打印 / 退出码                          │
//! │  handler ── IconGenerator（逐条编排，单条失败不影响其余条目）     │
//! │   ├─ loader    源图读取 + 解码（RGBA）                            │
//! │   ├─ pipeline  普通图标拉伸 / 自适应前景层居中合成                │
//! │   ├─ writer    临时文件 + rename 原子写入                         │
//! │   └─ manifest  iOS Contents.json                                  │
//! │  table ──── Android / iOS 固定尺寸表                              │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 两个生成器互不调用、不共享运行时状态，只共用这一套实现。

pub mod icon_gen;
