//! Typed failures for metric computation.
//!
//! Every fallible step in the input → formula pipeline reports one of these
//! variants instead of letting a raw parse failure or a non-finite float
//! escape to the caller. A zero denominator is an error, never a displayed
//! "inf" or "NaN".

use thiserror::Error;

/// Error type shared by the input gate and the formula engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// A required field was absent or blank. No computation is attempted.
    #[error("missing required input: {field}")]
    MissingInput { field: &'static str },

    /// A field was present but did not parse as a finite number.
    #[error("value for {field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A formula denominator was zero.
    #[error("cannot compute metric: {denominator} is zero")]
    DivisionByZero { denominator: &'static str },
}

impl MetricError {
    /// Create a missing-input error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingInput { field }
    }

    /// Create an invalid-number error, keeping the offending text.
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Create a division-by-zero error named after the denominator.
    pub fn division_by_zero(denominator: &'static str) -> Self {
        Self::DivisionByZero { denominator }
    }

    /// Short category name for grouping in reports.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => "MissingInput",
            Self::InvalidNumber { .. } => "InvalidNumber",
            Self::DivisionByZero { .. } => "DivisionByZero",
        }
    }
}
