//! Error types for simdly-math.
//!
//! Numeric kernels never fail: domain errors surface as IEEE values (NaN, ±∞,
//! 0). This module covers the configuration surface only, i.e. parsing a
//! dispatch level and asking for a level the host cannot run.

use std::fmt;

use crate::dispatch::DispatchLevel;

/// Errors that can occur while configuring the runtime dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// The requested dispatch level is not supported by this host or build.
    UnsupportedLevel {
        /// The level that was requested.
        level: DispatchLevel,
    },
    /// A dispatch level name could not be parsed.
    InvalidLevel {
        /// The text that failed to parse.
        value: String,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::UnsupportedLevel { level } => write!(
                f,
                "Unsupported dispatch level: {} is not available on this host",
                level
            ),
            MathError::InvalidLevel { value } => write!(
                f,
                "Invalid dispatch level: {:?} (expected one of fallback, narrow, avx2, avx512)",
                value
            ),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for simdly-math configuration.
pub type Result<T> = std::result::Result<T, MathError>;

/// Creates an unsupported-level error.
pub fn unsupported_level(level: DispatchLevel) -> MathError {
    MathError::UnsupportedLevel { level }
}

/// Creates an invalid-level error.
pub fn invalid_level(value: impl Into<String>) -> MathError {
    MathError::InvalidLevel {
        value: value.into(),
    }
}
