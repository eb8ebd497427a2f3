use super::super::storage::StorageError;
use thiserror::Error;

/// 提示严重级别（两档，均不致命，仅用于界面展示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// 与 PREPARING 列表重复
    Warning,
    /// READY 冲突、无效调用、存储失败
    Error,
}

/// Board operation errors
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Order number must be 1 or higher.")]
    InvalidNumber,

    #[error("Order #{0} is already in the 'PREPARING' list.")]
    AlreadyPreparing(u32),

    #[error("Order #{0} is already in the 'READY' list.")]
    AlreadyReady(u32),

    #[error("Order #{0} is not in the 'PREPARING' list.")]
    NotPreparing(u32),

    #[error("Order #{0} is not in the 'READY' list.")]
    NotReady(u32),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl BoardError {
    /// Severity shown to the user. A duplicate in PREPARING is the only
    /// warning; READY conflicts always outrank it and report as errors,
    /// as do invalid calls and storage failures.
    pub fn severity(&self) -> Severity {
        match self {
            BoardError::AlreadyPreparing(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
