//! Wire mirrors of the domain outcomes.
//!
//! `WireOutcome` and `WireValueOutcome<T>` shadow [`Outcome`] and
//! [`ValueOutcome`]. Conversion to the wire side happens before
//! transmission or persistence; on receipt the decoded mirror is turned
//! back into the domain model with `to_outcome` / `to_value_outcome`.

use serde::{Deserialize, Serialize};

use outcome_core::{Outcome, Reason, ValueOutcome};

use crate::envelope;
use crate::error::Result;
use crate::reason::WireReason;

/// Serializable mirror of an [`Outcome`].
///
/// # Example
///
/// ```rust
/// use outcome_core::Outcome;
/// use outcome_wire::WireOutcome;
///
/// let outcome = Outcome::fail("Error message");
/// let wire = WireOutcome::from_outcome(&outcome);
///
/// let bytes = wire.to_bytes().unwrap();
/// let restored = WireOutcome::from_bytes(&bytes).unwrap();
/// assert_eq!(restored.to_outcome(), outcome);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireOutcome {
    /// The reasons for the outcome, in attachment order.
    pub reasons: Vec<WireReason>,
}

impl WireOutcome {
    /// Convert a domain outcome into its wire mirror.
    ///
    /// Reasons are converted in order, each dispatched by its concrete kind.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            reasons: outcome.reasons().iter().map(WireReason::from_reason).collect(),
        }
    }

    /// Convert this wire outcome back into a domain outcome.
    ///
    /// Each reason is re-attached through the domain's `with_error` /
    /// `with_success` operation, preserving order and kind.
    pub fn to_outcome(&self) -> Outcome {
        let mut outcome = Outcome::ok();
        for reason in &self.reasons {
            outcome = match reason.to_reason() {
                Reason::Error(e) => outcome.with_error(e),
                Reason::Success(s) => outcome.with_success(s),
            };
        }
        outcome
    }

    /// Encode this wire outcome to compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        envelope::encode(self)
    }

    /// Decode a wire outcome from binary format.
    ///
    /// # Errors
    ///
    /// Returns [`WireCodecError::Decode`](crate::WireCodecError::Decode) if
    /// the data is malformed.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        envelope::decode(data)
    }
}

/// Serializable mirror of a [`ValueOutcome<T>`].
///
/// The `value` field of a failed outcome is written as `T::default()`; the
/// value is defined as meaningless on failure, and the decoding side never
/// reads the field on the failed path, so the sentinel cannot leak back
/// into the domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireValueOutcome<T> {
    /// The reasons for the outcome, in attachment order.
    pub reasons: Vec<WireReason>,

    /// The carried value; meaningful only when no reason is an error.
    pub value: T,
}

impl<T> WireValueOutcome<T> {
    /// Wrap a bare value as a successful wire outcome with no reasons.
    pub fn from_value(value: T) -> Self {
        Self {
            reasons: Vec::new(),
            value,
        }
    }

    /// Convert a domain value outcome into its wire mirror.
    ///
    /// The value is copied only from a successful source; a failed source
    /// emits `T::default()` in its place.
    pub fn from_value_outcome(outcome: &ValueOutcome<T>) -> Self
    where
        T: Clone + Default,
    {
        Self {
            reasons: outcome.reasons().iter().map(WireReason::from_reason).collect(),
            value: outcome.value().cloned().unwrap_or_default(),
        }
    }

    /// Convert this wire outcome back into a domain value outcome.
    ///
    /// Reasons are converted first; if they indicate failure, the failed
    /// outcome is returned immediately and the wire value field is never
    /// consulted. Otherwise the value is attached to the successful outcome.
    pub fn to_value_outcome(&self) -> ValueOutcome<T>
    where
        T: Clone,
    {
        let mut outcome = Outcome::ok();
        for reason in &self.reasons {
            outcome = match reason.to_reason() {
                Reason::Error(e) => outcome.with_error(e),
                Reason::Success(s) => outcome.with_success(s),
            };
        }

        if outcome.is_failed() {
            return ValueOutcome::from_outcome(outcome);
        }

        ValueOutcome::from_outcome(outcome).with_value(self.value.clone())
    }

    /// Encode this wire outcome to compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>>
    where
        T: Serialize,
    {
        envelope::encode(self)
    }

    /// Decode a wire outcome from binary format.
    ///
    /// # Errors
    ///
    /// Returns [`WireCodecError::Decode`](crate::WireCodecError::Decode) if
    /// the data is malformed.
    pub fn from_bytes(data: &[u8]) -> Result<Self>
    where
        T: for<'de> Deserialize<'de>,
    {
        envelope::decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reason::{WireError, WireSuccess};
    use outcome_core::{ErrorReason, OutcomeError, SuccessReason};

    #[test]
    fn test_outcome_with_success_converts_to_wire_success() {
        let outcome = Outcome::ok().with_success(SuccessReason::new("Success message"));

        let wire = WireOutcome::from_outcome(&outcome);
        assert_eq!(wire.reasons.len(), 1);
        assert!(matches!(wire.reasons[0], WireReason::Success(_)));
        assert_eq!(wire.reasons[0].message(), "Success message");
    }

    #[test]
    fn test_outcome_with_error_converts_to_wire_error() {
        let outcome = Outcome::fail("Error message");

        let wire = WireOutcome::from_outcome(&outcome);
        assert_eq!(wire.reasons.len(), 1);
        assert!(wire.reasons[0].is_error());
        assert_eq!(wire.reasons[0].message(), "Error message");
    }

    #[test]
    fn test_wire_outcome_with_success_converts_to_domain() {
        let wire = WireOutcome {
            reasons: vec![WireReason::Success(WireSuccess::new("Success message"))],
        };

        let outcome = wire.to_outcome();
        assert_eq!(outcome.reasons().len(), 1);
        assert!(outcome.reasons()[0].is_success());
        assert_eq!(outcome.reasons()[0].message(), "Success message");
    }

    #[test]
    fn test_wire_outcome_with_error_converts_to_domain() {
        let wire = WireOutcome {
            reasons: vec![WireReason::Error(WireError::new("Error message"))],
        };

        let outcome = wire.to_outcome();
        assert_eq!(outcome.reasons().len(), 1);
        assert!(outcome.reasons()[0].is_error());
        assert_eq!(outcome.reasons()[0].message(), "Error message");
    }

    #[test]
    fn test_nested_error_converts_to_wire_and_back() {
        let outcome = Outcome::ok().with_error(
            ErrorReason::new("Outer error message").caused_by(
                ErrorReason::new("Inner error message")
                    .caused_by(ErrorReason::new("Nested inner error message")),
            ),
        );

        let wire = WireOutcome::from_outcome(&outcome);
        assert_eq!(wire.to_outcome(), outcome);
    }

    #[test]
    fn test_empty_wire_value_outcome_yields_value() {
        let wire = WireValueOutcome { reasons: vec![], value: 42 };

        let outcome = wire.to_value_outcome();
        assert!(outcome.reasons().is_empty());
        assert_eq!(outcome.value(), Ok(&42));
    }

    #[test]
    fn test_wire_value_outcome_with_success_reason() {
        let wire = WireValueOutcome {
            reasons: vec![WireReason::Success(WireSuccess::new("Success!"))],
            value: 42,
        };

        let outcome = wire.to_value_outcome();
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Ok(&42));
        assert_eq!(outcome.reasons()[0].message(), "Success!");
    }

    #[test]
    fn test_wire_value_outcome_with_error_reason_fails() {
        let wire = WireValueOutcome {
            reasons: vec![WireReason::Error(WireError::new("Error!"))],
            value: 42,
        };

        let outcome = wire.to_value_outcome();
        assert!(outcome.is_failed());
        assert_eq!(outcome.value(), Err(OutcomeError::ValueOnFailure));
        assert_eq!(outcome.reasons().len(), 1);
        assert_eq!(outcome.reasons()[0].message(), "Error!");
    }

    #[test]
    fn test_successful_value_outcome_keeps_value() {
        let outcome = ValueOutcome::ok(42).with_success(SuccessReason::new("Success!"));

        let wire = WireValueOutcome::from_value_outcome(&outcome);
        assert_eq!(wire.value, 42);
        assert_eq!(wire.reasons.len(), 1);
        assert_eq!(wire.reasons[0].message(), "Success!");
    }

    #[test]
    fn test_failed_value_outcome_emits_default_value() {
        let outcome = ValueOutcome::ok(42).with_error(ErrorReason::new("Error!"));

        let wire = WireValueOutcome::from_value_outcome(&outcome);
        assert_eq!(wire.value, 0, "failed outcomes must carry the default value");
        assert!(wire.reasons[0].is_error());
    }

    #[test]
    fn test_bare_value_shortcut() {
        let wire = WireValueOutcome::from_value(42);
        assert!(wire.reasons.is_empty());

        let outcome = wire.to_value_outcome();
        assert_eq!(outcome.value(), Ok(&42));
        assert!(outcome.reasons().is_empty());
    }

    #[test]
    fn test_mixed_reason_list_preserves_order_and_kind() {
        let outcome = Outcome::ok()
            .with_error(ErrorReason::new("e1"))
            .with_success(SuccessReason::new("s1"))
            .with_error(ErrorReason::new("e2"));

        let wire = WireOutcome::from_outcome(&outcome);
        let kinds: Vec<bool> = wire.reasons.iter().map(WireReason::is_error).collect();
        assert_eq!(kinds, vec![true, false, true]);

        assert_eq!(wire.to_outcome(), outcome);
    }
}
