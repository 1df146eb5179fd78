//! # 渲染流水线模块
//!
//! ## 设计思路
//!
//! 两种渲染都是“缩放 + 可选居中贴图”，区别只在画布与 logo 的尺寸关系：
//! - 普通图标：源图直接拉伸到 `S × S`，不保留宽高比
//! - 自适应前景：透明 `S × S` 画布，logo 拉伸到 `round(ratio × S)` 后居中
//!
//! 系统会对自适应前景层施加任意形状的遮罩，logo 必须向内留白才不会被裁切。
//!
//! ## 实现思路
//!
//! 缩放优先走 `fast_image_resize`（卷积 + alpha 预乘），失败时回退到
//! `image::DynamicImage::resize_exact`。前景层合成不用 alpha-over，
//! 而是以 logo 自身 alpha 作蒙版逐通道混合。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

use super::{IconError, SourceImage};

/// 普通图标：源图拉伸铺满 `size × size`。
pub fn render_regular(
    source: &SourceImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    resize_exact(source.pixels(), size, size, filter)
}

/// 自适应图标前景层：透明画布上居中放置缩小后的 logo。
pub fn render_adaptive_foreground(
    source: &SourceImage,
    size: u32,
    logo_ratio: f64,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let logo_size = adaptive_logo_size(size, logo_ratio);
    let offset = centered_offset(size, logo_size);

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    if logo_size == 0 {
        return Ok(canvas);
    }

    let logo = resize_exact(source.pixels(), logo_size, logo_size, filter)?;

    paste_with_own_alpha(&mut canvas, &logo, offset, offset);

    Ok(canvas)
}

/// 以 `logo` 自身 alpha 为蒙版贴到画布上。
///
/// 四个通道（含 alpha）统一按 `dst·(255−a) + src·a` 混合，
/// 落在透明画布上即 `src·a/255`，半透明边缘的 alpha 会随之变小。
pub fn paste_with_own_alpha(canvas: &mut RgbaImage, logo: &RgbaImage, x: u32, y: u32) {
    for (lx, ly, src) in logo.enumerate_pixels() {
        let Some(dst) = canvas.get_pixel_mut_checked(x + lx, y + ly) else {
            continue;
        };
        *dst = mask_blend(*dst, *src, src[3]);
    }
}

fn mask_blend(dst: Rgba<u8>, src: Rgba<u8>, mask: u8) -> Rgba<u8> {
    let mask = mask as u32;
    let blend = |d: u8, s: u8| div255(d as u32 * (255 - mask) + s as u32 * mask);
    Rgba([
        blend(dst[0], src[0]),
        blend(dst[1], src[1]),
        blend(dst[2], src[2]),
        blend(dst[3], src[3]),
    ])
}

/// 整数近似 `v / 255`，四舍五入。
fn div255(v: u32) -> u8 {
    let tmp = v + 128;
    (((tmp >> 8) + tmp) >> 8) as u8
}

/// 自适应前景层中 logo 的边长：`round(ratio × size)`，恰好 .5 时取偶数。
pub fn adaptive_logo_size(size: u32, ratio: f64) -> u32 {
    let scaled = (size as f64 * ratio.clamp(0.0, 1.0)).round_ties_even();
    (scaled as u32).min(size)
}

/// logo 距画布上边与左边的偏移：`floor((size - logo) / 2)`。
pub fn centered_offset(size: u32, logo_size: u32) -> u32 {
    size.saturating_sub(logo_size) / 2
}

fn resize_exact(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    if target_width == 0 || target_height == 0 {
        return Err(IconError::Decode(format!(
            "目标尺寸无效：{}x{}",
            target_width, target_height
        )));
    }

    match resize_with_fast_image_resize(image, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                err
            );
            Ok(DynamicImage::ImageRgba8(image.clone())
                .resize_exact(target_width, target_height, filter)
                .to_rgba8())
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}
