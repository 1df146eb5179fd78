//! # 配置模块
//!
//! ## 设计思路
//!
//! 两个生成器本身没有可调参数：源图路径、输出路径和尺寸表都是固定的。
//! 这里仍把“运行环境相关”的少量参数收敛到 `GeneratorConfig`，
//! 让测试可以把输出根目录指向临时目录，而二进制入口始终使用 `Default`。
//!
//! 尺寸表本身不在这里，见 `table.rs`。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// 源 logo 的固定相对路径。
pub const DEFAULT_SOURCE_IMAGE: &str = "assets/images/new_logo.png";

/// 自适应图标前景层中 logo 占画布边长的比例。
pub const DEFAULT_ADAPTIVE_LOGO_RATIO: f64 = 0.6;

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 项目根目录，尺寸表中的相对路径都基于它解析。
    pub project_root: PathBuf,
    /// 源 logo 路径（相对 `project_root`，也可以是绝对路径）。
    pub source_image: PathBuf,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 自适应前景层 logo 比例。
    pub adaptive_logo_ratio: f64,
    /// 源图像素上限（`width * height`），在完整解码前按文件头检查。
    pub max_source_pixels: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_image: PathBuf::from(DEFAULT_SOURCE_IMAGE),
            resize_filter: FilterType::Lanczos3,
            adaptive_logo_ratio: DEFAULT_ADAPTIVE_LOGO_RATIO,
            max_source_pixels: 40_000_000,
        }
    }
}

impl GeneratorConfig {
    /// 以指定目录为项目根创建配置，其余参数取默认值。
    ///
    /// # 示例
    /// ```rust
    /// use app_icon_gen::icon_gen::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::with_root("/tmp/my-app");
    /// assert!(config.source_path().ends_with("assets/images/new_logo.png"));
    /// ```
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// 解析出的源图路径。
    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source_image)
    }

    /// 将相对路径解析到项目根目录下。
    ///
    /// 根目录为 `.` 时保持原样，保证控制台输出与固定相对路径一致。
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if relative.is_absolute() || self.project_root == Path::new(".") {
            return relative.to_path_buf();
        }
        self.project_root.join(relative)
    }
}
