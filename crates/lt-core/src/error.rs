//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers failures
//! that originate in this crate (coordinate validation, configuration).

use thiserror::Error;

/// Errors produced by `lt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
