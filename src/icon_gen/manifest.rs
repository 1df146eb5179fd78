//! # iOS 图标集清单（Contents.json）
//!
//! 清单内容是固定的，不从实际生成的文件反推。顺序遵循 Xcode 约定：
//! iphone 条目按尺寸再按倍率升序，随后是 ipad 条目，最后是 App Store 图标。
//!
//! 同一张 PNG 可以被多个 idiom 共用（例如 `Icon-App-20x20@2x.png` 既是
//! iphone 20pt@2x 也是 ipad 20pt@2x），所以条目数多于文件数。

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{writer, IconError};

/// 清单中的一个图片条目，字段顺序即序列化顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub idiom: String,
    pub scale: String,
    pub size: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

/// 完整清单文档。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// (idiom, scale, size, filename)
const APP_ICON_ENTRIES: [(&str, &str, &str, &str); 19] = [
    ("iphone", "2x", "20x20", "Icon-App-20x20@2x.png"),
    ("iphone", "3x", "20x20", "Icon-App-20x20@3x.png"),
    ("iphone", "1x", "29x29", "Icon-App-29x29@1x.png"),
    ("iphone", "2x", "29x29", "Icon-App-29x29@2x.png"),
    ("iphone", "3x", "29x29", "Icon-App-29x29@3x.png"),
    ("iphone", "2x", "40x40", "Icon-App-40x40@2x.png"),
    ("iphone", "3x", "40x40", "Icon-App-40x40@3x.png"),
    ("iphone", "2x", "60x60", "Icon-App-60x60@2x.png"),
    ("iphone", "3x", "60x60", "Icon-App-60x60@3x.png"),
    ("ipad", "1x", "20x20", "Icon-App-20x20@1x.png"),
    ("ipad", "2x", "20x20", "Icon-App-20x20@2x.png"),
    ("ipad", "1x", "29x29", "Icon-App-29x29@1x.png"),
    ("ipad", "2x", "29x29", "Icon-App-29x29@2x.png"),
    ("ipad", "1x", "40x40", "Icon-App-40x40@1x.png"),
    ("ipad", "2x", "40x40", "Icon-App-40x40@2x.png"),
    ("ipad", "1x", "76x76", "Icon-App-76x76@1x.png"),
    ("ipad", "2x", "76x76", "Icon-App-76x76@2x.png"),
    ("ipad", "2x", "83.5x83.5", "Icon-App-83.5x83.5@2x.png"),
    ("ios-marketing", "1x", "1024x1024", "Icon-App-1024x1024@1x.png"),
];

impl ManifestDocument {
    /// Flutter `Runner` 工程默认的 AppIcon 清单。
    pub fn app_icon() -> Self {
        let images = APP_ICON_ENTRIES
            .iter()
            .map(|&(idiom, scale, size, filename)| ManifestImage {
                idiom: idiom.to_string(),
                scale: scale.to_string(),
                size: size.to_string(),
                filename: filename.to_string(),
            })
            .collect();

        Self {
            images,
            info: ManifestInfo {
                author: "xcode".to_string(),
                version: 1,
            },
        }
    }

    /// 清单引用的文件名（去重，保持首次出现顺序）。
    pub fn filenames(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for image in &self.images {
            if !seen.contains(&image.filename.as_str()) {
                seen.push(image.filename.as_str());
            }
        }
        seen
    }

    /// 两空格缩进的 JSON 文本，末尾无换行。
    pub fn to_json(&self) -> Result<String, IconError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| IconError::Manifest(format!("序列化 Contents.json 失败：{}", e)))
    }

    /// 写出清单，覆盖已有文件。
    pub fn write_to(&self, path: &Path) -> Result<(), IconError> {
        let json = self.to_json()?;
        writer::write_bytes(path, json.as_bytes())
    }
}
