//! Custom error types for matinv
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for matinv operations
#[derive(Error, Debug)]
pub enum MatinvError {
    /// The matrix has a (numerically) zero determinant and no inverse exists
    #[error("matrix is singular and cannot be inverted")]
    Singular,

    /// Dimension errors: non-square input, ragged rows, mismatched operands
    #[error("shape error: {0}")]
    Shape(String),

    /// Malformed matrix literal on the command line
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for matinv operations
pub type Result<T> = std::result::Result<T, MatinvError>;

impl MatinvError {
    /// Create a shape error
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
