//! Error types for pipeline configuration and frame processing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a configuration or processing a frame.
///
/// Per-pixel evaluation never fails; everything here happens before or
/// around it.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Configuration value rejected.
    #[error(transparent)]
    Config(#[from] grade_core::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading a preset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preset file does not exist.
    #[error("preset file not found: {path}")]
    PresetNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Frame dimensions are unusable.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Buffer length does not match the frame dimensions.
    #[error("size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch {
        /// `width * height * channels`
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

/// Result type for pipeline operations.
pub type ColorResult<T> = Result<T, ColorError>;
