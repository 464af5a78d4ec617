//! Error types for model-worker-wire.

use thiserror::Error;

/// Main error type for all encoding operations.
///
/// Every variant is raised before the first byte of a frame is written,
/// so a failed encode never leaves a partial frame in the output buffer.
#[derive(Debug, Error)]
pub enum WireError {
    /// A required text field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Command kind or code outside `{load, predict}`.
    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    /// GPU selector is not a non-negative decimal integer.
    #[error("Invalid GPU selector: {0:?}")]
    InvalidGpuSelector(String),

    /// Field does not fit the configured length limit.
    #[error("Field {field} is {size} bytes, exceeds maximum {max}")]
    FieldTooLarge {
        /// Name of the offending field.
        field: &'static str,
        /// Encoded size in bytes.
        size: usize,
        /// Configured limit.
        max: u32,
    },

    /// Output buffer cannot hold the whole frame.
    #[error("Buffer too small: frame needs {needed} bytes, {remaining} available")]
    BufferTooSmall {
        /// Encoded frame size.
        needed: usize,
        /// Writable bytes left in the buffer.
        remaining: usize,
    },

    /// JSON command document could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using WireError.
pub type Result<T> = std::result::Result<T, WireError>;
