//! Error types for track parsing.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised while reading GPS input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    /// Input was not two comma-separated components.
    #[error("malformed GPS coordinate")]
    Malformed {
        /// Input as received.
        value: String,
    },
    /// A component was not a decimal number.
    #[error("invalid GPS coordinate component")]
    InvalidNumber {
        /// Offending component, trimmed.
        component: String,
        /// Underlying parse failure.
        source: ParseFloatError,
    },
}

/// Convenience alias for track results.
pub type TrackResult<T> = Result<T, TrackError>;
