//! Error types for the outcome model.

use thiserror::Error;

/// Errors raised by outcome accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutcomeError {
    /// The value of a failed outcome was read.
    #[error("cannot read the value of a failed outcome")]
    ValueOnFailure,

    /// The outcome is successful but no value was ever attached.
    #[error("outcome has no value set")]
    ValueMissing,
}

/// Result type alias for outcome operations.
pub type Result<T> = std::result::Result<T, OutcomeError>;
