//! # 生成结果模型
//!
//! - `GeneratedIcon`：已成功落盘的单个图标
//! - `IconFailure`：单个条目的失败原因
//! - `GenerationReport`：一轮生成的汇总

use std::path::PathBuf;

use super::{IconError, IconMode};

/// 已写出的图标。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub mode: IconMode,
}

/// 单个条目失败。
#[derive(Debug)]
pub struct IconFailure {
    pub path: PathBuf,
    pub error: IconError,
}

/// 一轮生成的结果。
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
    pub failures: Vec<IconFailure>,
    /// iOS 清单路径；Android 或有条目失败时为 `None`。
    pub manifest: Option<PathBuf>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
