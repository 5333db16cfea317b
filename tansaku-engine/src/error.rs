//! Layered error types
//!
//! Matching itself never fails; errors only surface at the API boundary.

use tansaku_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// Input the caller should not have passed (for example non-UTF-8 text)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<std::str::Utf8Error> for MatchError {
    fn from(err: std::str::Utf8Error) -> Self {
        MatchError::InvalidArgument(format!("text is not valid UTF-8: {err}"))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, MatchError>;
