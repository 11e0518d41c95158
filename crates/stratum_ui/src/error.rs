//! # UI Error Types
//!
//! Errors that can occur while building widgets or loading configuration.
//! Per-frame code never fails; everything here is reported at construction.

use thiserror::Error;

/// Errors that can occur in the UI toolkit.
#[derive(Error, Debug)]
pub enum UiError {
    /// A slider was built with an empty or non-finite span.
    #[error("invalid slider range: min {min}, max {max}")]
    InvalidSliderRange {
        /// Position of the minimum marker.
        min: f32,
        /// Position of the maximum marker.
        max: f32,
    },

    /// A slider was built with a non-positive or non-finite track length.
    #[error("invalid slider length: {0}")]
    InvalidSliderLength(f32),

    /// Step size of a stepped slider must be positive and finite.
    #[error("invalid slider step: {0}")]
    InvalidStep(f32),

    /// A discrete slider needs at least two published values.
    #[error("discrete slider needs at least two values, got {0}")]
    TooFewDiscreteValues(usize),

    /// Named style not present in the configuration.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
