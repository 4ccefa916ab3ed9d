//! Error types: session setup, tuning validation, tuning file loading

use thiserror::Error;

/// Tuning validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TuningError {
    #[error("tuning value `{field}` must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("tuning value `{field}` must not be negative")]
    Negative { field: &'static str },
}

/// Session construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("invalid tuning: {0}")]
    InvalidTuning(#[from] TuningError),
}

/// Tuning file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning file rejected: {0}")]
    Invalid(#[from] TuningError),
}
