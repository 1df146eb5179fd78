//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 源 logo 在一轮生成中只解码一次，之后以只读 RGBA 形式供所有条目复用。
//!
//! ## 实现思路
//!
//! 1. 存在性检查（缺失即 `MissingInput`，此时不会有任何写入）
//! 2. 读取字节并识别格式
//! 3. 按文件头尺寸做像素上限检查，再完整解码
//! 4. 统一转换为 RGBA8

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{GenericImageView, RgbaImage};

use super::{GeneratorConfig, IconError};

/// 已解码的源 logo。
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub(crate) path: PathBuf,
    pub(crate) pixels: RgbaImage,
}

impl SourceImage {
    /// 从配置中的源图路径加载。
    pub fn load(config: &GeneratorConfig) -> Result<Self, IconError> {
        Self::load_from_path(&config.source_path(), config.max_source_pixels)
    }

    /// 从任意路径加载并转换为 RGBA。
    pub fn load_from_path(path: &Path, max_pixels: u64) -> Result<Self, IconError> {
        if !path.exists() {
            return Err(IconError::MissingInput(path.display().to_string()));
        }

        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| {
            IconError::FileSystem(format!("{}: 无法读取源图：{}", path.display(), e))
        })?;

        let (header_width, header_height) = inspect_dimensions(&bytes)
            .map_err(|e| IconError::Decode(format!("{}: {}", path.display(), e)))?;
        validate_pixel_limit(header_width, header_height, max_pixels)
            .map_err(|e| IconError::Decode(format!("{}: {}", path.display(), e)))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| IconError::Decode(format!("{}: 图片解码失败：{}", path.display(), e)))?;
        let (width, height) = decoded.dimensions();

        log::info!(
            "✅ 源图解码成功 - 尺寸: {}x{} 颜色: {:?}",
            width,
            height,
            decoded.color()
        );

        Ok(Self {
            path: path.to_path_buf(),
            pixels: decoded.to_rgba8(),
        })
    }

    /// 直接包装内存中的 RGBA 图像（测试与库调用方使用）。
    pub fn from_rgba(path: impl Into<PathBuf>, pixels: RgbaImage) -> Self {
        Self {
            path: path.into(),
            pixels,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// 仅读取文件头中的宽高，用于在完整解码前做像素限制检查。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("无法识别图片格式：{}", e))?
        .into_dimensions()
        .map_err(|e| format!("无法读取图片尺寸：{}", e))
}

fn validate_pixel_limit(width: u32, height: u32, max_pixels: u64) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("图片尺寸无效：{}x{}", width, height));
    }

    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| "图片像素数溢出".to_string())?;

    if pixels > max_pixels {
        return Err(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, max_pixels
        ));
    }

    Ok(())
}
