//! Reading Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("出版物标识不能为空")]
    EmptyIdentifier,

    #[error("无效的进度值（须在 [0.0, 1.0] 内）: {0}")]
    InvalidProgression(f64),
}
