//! # 尺寸表
//!
//! 两个平台要求的输出文件、像素尺寸与渲染模式，全部为编译期常量。
//! 顺序即处理顺序（也是控制台输出顺序）。

/// Android 图标渲染模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    /// 铺满画布的普通图标。
    Regular,
    /// 自适应图标前景层：logo 缩小并居中在透明画布上。
    AdaptiveForeground,
}

/// 一个 Android 输出条目。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidIconSpec {
    pub path: &'static str,
    pub size: u32,
    pub mode: IconMode,
}

/// 一个 iOS 输出条目，文件位于 [`IOS_ICONSET_DIR`] 下。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosIconSpec {
    pub filename: &'static str,
    pub size: u32,
}

const fn android(path: &'static str, size: u32, mode: IconMode) -> AndroidIconSpec {
    AndroidIconSpec { path, size, mode }
}

const fn ios(filename: &'static str, size: u32) -> IosIconSpec {
    IosIconSpec { filename, size }
}

pub const ANDROID_ICONS: [AndroidIconSpec; 10] = [
    // 旧版 Android 使用的普通图标
    android("android/app/src/main/res/mipmap-mdpi/ic_launcher.png", 48, IconMode::Regular),
    android("android/app/src/main/res/mipmap-hdpi/ic_launcher.png", 72, IconMode::Regular),
    android("android/app/src/main/res/mipmap-xhdpi/ic_launcher.png", 96, IconMode::Regular),
    android("android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png", 144, IconMode::Regular),
    android("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png", 192, IconMode::Regular),
    // 自适应图标前景层
    android(
        "android/app/src/main/res/mipmap-mdpi/ic_launcher_foreground.png",
        108,
        IconMode::AdaptiveForeground,
    ),
    android(
        "android/app/src/main/res/mipmap-hdpi/ic_launcher_foreground.png",
        162,
        IconMode::AdaptiveForeground,
    ),
    android(
        "android/app/src/main/res/mipmap-xhdpi/ic_launcher_foreground.png",
        216,
        IconMode::AdaptiveForeground,
    ),
    android(
        "android/app/src/main/res/mipmap-xxhdpi/ic_launcher_foreground.png",
        324,
        IconMode::AdaptiveForeground,
    ),
    android(
        "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_foreground.png",
        432,
        IconMode::AdaptiveForeground,
    ),
];

/// iOS 图标集目录。
pub const IOS_ICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// iOS 图标集清单文件名。
pub const IOS_MANIFEST_FILE: &str = "Contents.json";

pub const IOS_ICONS: [IosIconSpec; 15] = [
    ios("Icon-App-20x20@1x.png", 20),
    ios("Icon-App-20x20@2x.png", 40),
    ios("Icon-App-20x20@3x.png", 60),
    ios("Icon-App-29x29@1x.png", 29),
    ios("Icon-App-29x29@2x.png", 58),
    ios("Icon-App-29x29@3x.png", 87),
    ios("Icon-App-40x40@1x.png", 40),
    ios("Icon-App-40x40@2x.png", 80),
    ios("Icon-App-40x40@3x.png", 120),
    ios("Icon-App-60x60@2x.png", 120),
    ios("Icon-App-60x60@3x.png", 180),
    ios("Icon-App-76x76@1x.png", 76),
    ios("Icon-App-76x76@2x.png", 152),
    ios("Icon-App-83.5x83.5@2x.png", 167),
    ios("Icon-App-1024x1024@1x.png", 1024),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn android_table_covers_five_densities_in_both_modes() {
        let regular = ANDROID_ICONS
            .iter()
            .filter(|spec| spec.mode == IconMode::Regular)
            .count();
        assert_eq!(regular, 5);
        assert_eq!(ANDROID_ICONS.len() - regular, 5);

        for density in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
            let dir = format!("/mipmap-{density}/");
            assert_eq!(ANDROID_ICONS.iter().filter(|s| s.path.contains(&dir)).count(), 2);
        }
    }

    #[test]
    fn adaptive_canvas_is_two_and_a_quarter_times_regular() {
        let (regular, adaptive): (Vec<&AndroidIconSpec>, Vec<&AndroidIconSpec>) = ANDROID_ICONS
            .iter()
            .partition(|spec| spec.mode == IconMode::Regular);
        for (r, a) in regular.iter().zip(adaptive.iter()) {
            assert_eq!(r.size * 9 / 4, a.size);
        }
    }

    #[test]
    fn output_paths_are_unique() {
        let android: HashSet<_> = ANDROID_ICONS.iter().map(|s| s.path).collect();
        assert_eq!(android.len(), ANDROID_ICONS.len());

        let ios: HashSet<_> = IOS_ICONS.iter().map(|s| s.filename).collect();
        assert_eq!(ios.len(), IOS_ICONS.len());
    }

    #[test]
    fn ios_table_ends_with_store_icon() {
        let last = IOS_ICONS.last().copied();
        assert_eq!(last, Some(ios("Icon-App-1024x1024@1x.png", 1024)));
    }
}
