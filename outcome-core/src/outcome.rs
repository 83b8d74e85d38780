//! Outcomes: success/failure wrappers over ordered reason lists.
//!
//! An `Outcome` is failed exactly when at least one of its reasons is an
//! error. `ValueOutcome<T>` additionally carries a value that is readable
//! only while the outcome is successful.

use serde::{Deserialize, Serialize};

use crate::error::{OutcomeError, Result};
use crate::reason::{ErrorReason, Reason, SuccessReason};

/// A success/failure outcome carrying an ordered list of reasons.
///
/// # Example
///
/// ```rust
/// use outcome_core::{ErrorReason, Outcome};
///
/// let ok = Outcome::ok();
/// assert!(ok.is_success());
///
/// let failed = Outcome::fail("boom");
/// assert!(failed.is_failed());
/// assert_eq!(failed.reasons().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    reasons: Vec<Reason>,
}

impl Outcome {
    /// Create a successful outcome with no reasons.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Create a failed outcome with a single error reason.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::ok().with_error(ErrorReason::new(message))
    }

    /// Append an error reason. The outcome becomes (or stays) failed.
    pub fn with_error(mut self, error: ErrorReason) -> Self {
        self.reasons.push(Reason::Error(error));
        self
    }

    /// Append a success reason.
    pub fn with_success(mut self, success: SuccessReason) -> Self {
        self.reasons.push(Reason::Success(success));
        self
    }

    /// Returns `true` if any reason is an error.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.reasons.iter().any(Reason::is_error)
    }

    /// Returns `true` if no reason is an error.
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Returns all reasons in the order they were attached.
    #[inline]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Returns only the error reasons, in order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorReason> {
        self.reasons.iter().filter_map(|r| match r {
            Reason::Error(e) => Some(e),
            Reason::Success(_) => None,
        })
    }

    /// Returns only the success reasons, in order.
    pub fn successes(&self) -> impl Iterator<Item = &SuccessReason> {
        self.reasons.iter().filter_map(|r| match r {
            Reason::Success(s) => Some(s),
            Reason::Error(_) => None,
        })
    }
}

/// An outcome carrying a value of type `T`.
///
/// The value is readable only while the outcome is successful; reading it on
/// a failed outcome is a caller bug and reports
/// [`OutcomeError::ValueOnFailure`].
///
/// # Example
///
/// ```rust
/// use outcome_core::{OutcomeError, ValueOutcome};
///
/// let ok = ValueOutcome::ok(42);
/// assert_eq!(ok.value(), Ok(&42));
///
/// let failed = ValueOutcome::<i32>::fail("boom");
/// assert_eq!(failed.value(), Err(OutcomeError::ValueOnFailure));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueOutcome<T> {
    reasons: Vec<Reason>,
    value: Option<T>,
}

impl<T> ValueOutcome<T> {
    /// Create a successful outcome holding `value`.
    pub fn ok(value: T) -> Self {
        Self {
            reasons: Vec::new(),
            value: Some(value),
        }
    }

    /// Create a failed outcome with a single error reason and no value.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            reasons: vec![Reason::Error(ErrorReason::new(message))],
            value: None,
        }
    }

    /// Lift a plain [`Outcome`] into a value outcome with no value attached.
    ///
    /// Attach the value afterwards with [`ValueOutcome::with_value`] once the
    /// outcome is known to be successful.
    pub fn from_outcome(outcome: Outcome) -> Self {
        Self {
            reasons: outcome.reasons,
            value: None,
        }
    }

    /// Append an error reason. The outcome becomes (or stays) failed.
    pub fn with_error(mut self, error: ErrorReason) -> Self {
        self.reasons.push(Reason::Error(error));
        self
    }

    /// Append a success reason.
    pub fn with_success(mut self, success: SuccessReason) -> Self {
        self.reasons.push(Reason::Success(success));
        self
    }

    /// Attach (or replace) the value.
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns `true` if any reason is an error.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.reasons.iter().any(Reason::is_error)
    }

    /// Returns `true` if no reason is an error.
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Returns all reasons in the order they were attached.
    #[inline]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Returns only the error reasons, in order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorReason> {
        self.reasons.iter().filter_map(|r| match r {
            Reason::Error(e) => Some(e),
            Reason::Success(_) => None,
        })
    }

    /// Returns only the success reasons, in order.
    pub fn successes(&self) -> impl Iterator<Item = &SuccessReason> {
        self.reasons.iter().filter_map(|r| match r {
            Reason::Success(s) => Some(s),
            Reason::Error(_) => None,
        })
    }

    /// Borrow the value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::ValueOnFailure`] if the outcome is failed, and
    /// [`OutcomeError::ValueMissing`] if it is successful but no value was
    /// ever attached.
    pub fn value(&self) -> Result<&T> {
        if self.is_failed() {
            return Err(OutcomeError::ValueOnFailure);
        }
        self.value.as_ref().ok_or(OutcomeError::ValueMissing)
    }

    /// Consume the outcome and take the value, under the same rules as
    /// [`ValueOutcome::value`].
    pub fn into_value(self) -> Result<T> {
        if self.is_failed() {
            return Err(OutcomeError::ValueOnFailure);
        }
        self.value.ok_or(OutcomeError::ValueMissing)
    }
}
