//! # 命令行服务层
//!
//! ## 设计思路
//!
//! 两个二进制入口都只是“配置 → 生成 → 打印”。这里把打印逻辑收敛起来，
//! 输出目标抽象为 `io::Write`，测试可以直接捕获控制台文本。
//!
//! 标准输出只承载面向用户的进度行与横幅，诊断日志走 `log`（stderr）。

use std::io::{self, Write};
use std::process::ExitCode;

use super::{GenerationReport, GeneratorConfig, IconError, IconGenerator};

/// 一次命令行运行的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 所有条目均已生成。
    Completed,
    /// 源图缺失，未写入任何文件。
    MissingInput,
    /// 至少一个条目失败，或源图无法解码。
    Failed,
}

impl RunStatus {
    /// 源图缺失按原有行为视为正常退出。
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Completed | Self::MissingInput => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// 生成 Android 图标集并输出进度。
pub fn run_android(config: GeneratorConfig, out: &mut impl Write) -> io::Result<RunStatus> {
    let generator = IconGenerator::new(config);
    let source_path = generator.config().source_path();

    if !source_path.exists() {
        return report_missing_input(&IconError::MissingInput(source_path.display().to_string()), out);
    }

    writeln!(out, "Generating Android icons...")?;
    let mut progress = ProgressPrinter::new(out);
    let result = generator.generate_android(|icon| progress.created(&icon.path, icon.size));
    progress.finish()?;

    let report = match result {
        Ok(report) => report,
        Err(err) => return report_run_error(&err, out),
    };

    if !report.is_complete() {
        return report_failures(&report, "Android", out);
    }

    writeln!(out, "✅ All Android icons generated successfully!")?;
    writeln!(out, "\nNext steps:")?;
    writeln!(out, "1. Run: flutter clean")?;
    writeln!(out, "2. Run: flutter pub get")?;
    writeln!(out, "3. Build and test your app")?;
    Ok(RunStatus::Completed)
}

/// 生成 iOS 图标集与清单并输出进度。
pub fn run_ios(config: GeneratorConfig, out: &mut impl Write) -> io::Result<RunStatus> {
    let generator = IconGenerator::new(config);
    let source_path = generator.config().source_path();

    if !source_path.exists() {
        return report_missing_input(&IconError::MissingInput(source_path.display().to_string()), out);
    }

    writeln!(out, "Generating iOS icons...")?;
    let mut progress = ProgressPrinter::new(out);
    let result = generator.generate_ios(|icon| progress.created(&icon.path, icon.size));
    progress.finish()?;

    let report = match result {
        Ok(report) => report,
        Err(err) => return report_run_error(&err, out),
    };

    if !report.is_complete() {
        return report_failures(&report, "iOS", out);
    }

    if let Some(manifest) = &report.manifest {
        writeln!(out, "Created: {}", manifest.display())?;
    }
    writeln!(out, "✅ All iOS icons generated successfully!")?;
    Ok(RunStatus::Completed)
}

/// 进度回调内无法返回 `io::Error`，先暂存第一个写入错误，结束时统一上抛。
struct ProgressPrinter<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> ProgressPrinter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    fn created(&mut self, path: &std::path::Path, size: u32) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "Created: {} ({}x{})", path.display(), size, size) {
            self.error = Some(err);
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn report_missing_input(err: &IconError, out: &mut impl Write) -> io::Result<RunStatus> {
    log::warn!("源图缺失，未生成任何文件 [{}]", err.code());
    writeln!(out, "Error: {}", err)?;
    Ok(RunStatus::MissingInput)
}

fn report_run_error(err: &IconError, out: &mut impl Write) -> io::Result<RunStatus> {
    if let IconError::MissingInput(_) = err {
        return report_missing_input(err, out);
    }
    log::error!("❌ 生成终止 [{}/{}]: {}", err.stage(), err.code(), err);
    writeln!(out, "Error: {}", err)?;
    Ok(RunStatus::Failed)
}

fn report_failures(
    report: &GenerationReport,
    platform: &str,
    out: &mut impl Write,
) -> io::Result<RunStatus> {
    for failure in &report.failures {
        writeln!(out, "Failed: {}: {}", failure.path.display(), failure.error)?;
    }
    writeln!(
        out,
        "❌ {} of {} {} outputs failed",
        report.failures.len(),
        report.failures.len() + report.icons.len(),
        platform
    )?;
    Ok(RunStatus::Failed)
}
