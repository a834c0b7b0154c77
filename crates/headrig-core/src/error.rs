//! Error types for headrig.

use thiserror::Error;

/// The main error type for headrig operations.
///
/// The orientation mapping itself never fails; these cover the motion source,
/// option validation, and configuration I/O around it.
#[derive(Error, Debug)]
pub enum HeadrigError {
    /// The motion source could not be started (sensor missing or access denied).
    #[error("motion source unavailable: {0}")]
    MotionUnavailable(String),

    /// An option failed validation.
    #[error("invalid option '{field}': {reason}")]
    InvalidOption {
        field: &'static str,
        reason: String,
    },

    /// A screen orientation name could not be parsed.
    #[error("unknown screen orientation '{0}'")]
    UnknownOrientation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for headrig operations.
pub type Result<T> = std::result::Result<T, HeadrigError>;
