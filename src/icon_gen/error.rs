//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 图标生成链路只有三类真正会发生的失败：源图缺失、源图无法解码、磁盘写入失败，
//! 另加清单序列化失败。统一收敛到 `IconError`，由 `thiserror` 提供可读消息，
//! 调用侧可以按分支决定“整轮终止”还是“跳过单个条目”。
//!
//! 每个变体的字符串负载都应包含出错的路径，保证一行诊断即可定位问题。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("{0} not found!")]
    MissingInput(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("清单错误：{0}")]
    Manifest(String),
}

impl IconError {
    /// 稳定的错误码，用于日志与失败汇总。
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => "E_MISSING_INPUT",
            Self::Decode(_) => "E_DECODE",
            Self::FileSystem(_) => "E_FILESYSTEM",
            Self::Manifest(_) => "E_MANIFEST",
        }
    }

    /// 出错所在的处理阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MissingInput(_) | Self::Decode(_) => "load",
            Self::FileSystem(_) => "write",
            Self::Manifest(_) => "manifest",
        }
    }
}
