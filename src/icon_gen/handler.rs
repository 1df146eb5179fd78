//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不关心控制台输出。处理链路固定为：
//! 1. 加载并解码源图（缺失或无法解码时整轮终止，不产生任何写入）
//! 2. 按尺寸表顺序逐条渲染、落盘
//! 3. iOS：全部条目成功后写出 `Contents.json`
//!
//! ## 实现思路
//!
//! - 条目之间相互独立：单条写入失败只记录到报告中，继续处理后续条目。
//! - 清单只在 15 个文件全部写出后生成，保证清单与文件一一对应。
//! - 每写出一个文件就回调 `on_progress`，由调用方决定如何展示。
//! - 记录 `decode/render/manifest/total` 阶段耗时，便于性能诊断。

use std::path::{Path, PathBuf};
use std::time::Instant;

use super::pipeline::{render_adaptive_foreground, render_regular};
use super::{
    writer, AndroidIconSpec, GeneratedIcon, GenerationReport, GeneratorConfig, IconError,
    IconFailure, IconMode, IosIconSpec, ManifestDocument, SourceImage, ANDROID_ICONS,
    IOS_ICONSET_DIR, IOS_ICONS, IOS_MANIFEST_FILE,
};

/// 图标生成器。
pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    /// # 示例
    /// ```rust,no_run
    /// use app_icon_gen::icon_gen::{GeneratorConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(GeneratorConfig::default());
    /// let report = generator.generate_android(|icon| println!("{}", icon.path.display()))?;
    /// assert!(report.is_complete());
    /// # Ok::<(), app_icon_gen::icon_gen::IconError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// iOS 图标集目录的完整路径。
    pub fn ios_iconset_dir(&self) -> PathBuf {
        self.config.resolve(IOS_ICONSET_DIR)
    }

    /// 生成 Android 图标集。
    ///
    /// 返回 `Err` 仅表示整轮无法开始（源图缺失或解码失败）；
    /// 单个条目的失败记录在 [`GenerationReport::failures`] 中。
    pub fn generate_android<P>(&self, on_progress: P) -> Result<GenerationReport, IconError>
    where
        P: FnMut(&GeneratedIcon),
    {
        self.generate_android_entries(&ANDROID_ICONS, on_progress)
    }

    pub(crate) fn generate_android_entries<P>(
        &self,
        entries: &[AndroidIconSpec],
        mut on_progress: P,
    ) -> Result<GenerationReport, IconError>
    where
        P: FnMut(&GeneratedIcon),
    {
        let total_start = Instant::now();
        let source = self.load_source()?;

        let render_start = Instant::now();
        let mut report = GenerationReport::default();
        for spec in entries {
            let path = self.config.resolve(spec.path);
            self.render_entry(&source, &path, spec.size, spec.mode, &mut report, &mut on_progress);
        }

        log::info!(
            "⏱️ Android 图标生成完成 - 成功: {} 失败: {} 渲染: {:?} 总计: {:?}",
            report.icons.len(),
            report.failures.len(),
            render_start.elapsed(),
            total_start.elapsed()
        );

        Ok(report)
    }

    /// 生成 iOS 图标集与 `Contents.json`。
    pub fn generate_ios<P>(&self, on_progress: P) -> Result<GenerationReport, IconError>
    where
        P: FnMut(&GeneratedIcon),
    {
        self.generate_ios_entries(&IOS_ICONS, on_progress)
    }

    pub(crate) fn generate_ios_entries<P>(
        &self,
        entries: &[IosIconSpec],
        mut on_progress: P,
    ) -> Result<GenerationReport, IconError>
    where
        P: FnMut(&GeneratedIcon),
    {
        let total_start = Instant::now();
        let source = self.load_source()?;
        let iconset_dir = self.ios_iconset_dir();

        let render_start = Instant::now();
        let mut report = GenerationReport::default();
        for spec in entries {
            let path = iconset_dir.join(spec.filename);
            self.render_entry(
                &source,
                &path,
                spec.size,
                IconMode::Regular,
                &mut report,
                &mut on_progress,
            );
        }
        let render_elapsed = render_start.elapsed();

        let manifest_start = Instant::now();
        if report.is_complete() {
            let manifest_path = iconset_dir.join(IOS_MANIFEST_FILE);
            match ManifestDocument::app_icon().write_to(&manifest_path) {
                Ok(()) => {
                    log::debug!("📝 已写出清单: {}", manifest_path.display());
                    report.manifest = Some(manifest_path);
                }
                Err(error) => {
                    log::error!("❌ 清单写出失败 [{}]: {}", error.code(), error);
                    report.failures.push(IconFailure {
                        path: manifest_path,
                        error,
                    });
                }
            }
        } else {
            log::warn!(
                "⚠️ {} 个图标生成失败，跳过 {} 以避免引用缺失文件",
                report.failures.len(),
                IOS_MANIFEST_FILE
            );
        }

        log::info!(
            "⏱️ iOS 图标生成完成 - 成功: {} 失败: {} 渲染: {:?} 清单: {:?} 总计: {:?}",
            report.icons.len(),
            report.failures.len(),
            render_elapsed,
            manifest_start.elapsed(),
            total_start.elapsed()
        );

        Ok(report)
    }

    fn load_source(&self) -> Result<SourceImage, IconError> {
        let decode_start = Instant::now();
        let source = SourceImage::load(&self.config)?;
        log::info!(
            "⏱️ 源图解码耗时: {:?} - {}",
            decode_start.elapsed(),
            source.path().display()
        );
        Ok(source)
    }

    fn render_entry<P>(
        &self,
        source: &SourceImage,
        path: &Path,
        size: u32,
        mode: IconMode,
        report: &mut GenerationReport,
        on_progress: &mut P,
    ) where
        P: FnMut(&GeneratedIcon),
    {
        match self.render_and_write(source, path, size, mode) {
            Ok(()) => {
                let icon = GeneratedIcon {
                    path: path.to_path_buf(),
                    size,
                    mode,
                };
                on_progress(&icon);
                report.icons.push(icon);
            }
            Err(error) => {
                log::error!(
                    "❌ 图标生成失败 [{}/{}] {}: {}",
                    error.stage(),
                    error.code(),
                    path.display(),
                    error
                );
                report.failures.push(IconFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    fn render_and_write(
        &self,
        source: &SourceImage,
        path: &Path,
        size: u32,
        mode: IconMode,
    ) -> Result<(), IconError> {
        let filter = self.config.resize_filter;
        let image = match mode {
            IconMode::Regular => render_regular(source, size, filter)?,
            IconMode::AdaptiveForeground => {
                render_adaptive_foreground(source, size, self.config.adaptive_logo_ratio, filter)?
            }
        };

        log::debug!("🖼️ 渲染完成 {:?} {}x{} -> {}", mode, size, size, path.display());

        writer::write_png(path, &image)
    }
}
