//! Reasons attached to outcomes.
//!
//! A reason is a human-readable message plus a metadata map. Reasons come in
//! exactly two kinds: `ErrorReason`, which may carry a tree of nested error
//! causes, and `SuccessReason`, which is always a leaf.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::MetaValue;

/// An error reason: why an outcome failed.
///
/// Errors form a rooted causal tree via [`ErrorReason::caused_by`]: each
/// node's `causes` are its proximate causes, kept in insertion order. The
/// builder API can only attach freshly owned errors, so the tree is acyclic
/// by construction.
///
/// # Example
///
/// ```rust
/// use outcome_core::ErrorReason;
///
/// let err = ErrorReason::new("connection failed")
///     .with_metadata("host", "db-1")
///     .caused_by(ErrorReason::new("timeout"));
///
/// assert_eq!(err.message(), "connection failed");
/// assert_eq!(err.causes().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReason {
    message: String,
    metadata: BTreeMap<String, MetaValue>,
    causes: Vec<ErrorReason>,
}

impl ErrorReason {
    /// Create a new error reason with a message and no metadata or causes.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    /// Attach a metadata entry, replacing any previous value for the key.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Append a single proximate cause.
    pub fn caused_by(mut self, cause: ErrorReason) -> Self {
        self.causes.push(cause);
        self
    }

    /// Append several proximate causes, preserving their order.
    pub fn caused_by_all(mut self, causes: impl IntoIterator<Item = ErrorReason>) -> Self {
        self.causes.extend(causes);
        self
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the metadata map.
    #[inline]
    pub fn metadata(&self) -> &BTreeMap<String, MetaValue> {
        &self.metadata
    }

    /// Returns the proximate causes, in the order they were attached.
    #[inline]
    pub fn causes(&self) -> &[ErrorReason] {
        &self.causes
    }
}

/// A success reason: a note attached to a successful outcome.
///
/// Unlike errors, successes never nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessReason {
    message: String,
    metadata: BTreeMap<String, MetaValue>,
}

impl SuccessReason {
    /// Create a new success reason with a message and no metadata.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry, replacing any previous value for the key.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the success message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the metadata map.
    #[inline]
    pub fn metadata(&self) -> &BTreeMap<String, MetaValue> {
        &self.metadata
    }
}

/// A reason for an outcome, either an error or a success.
///
/// This is a closed set: outcomes can hold no other reason kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reason {
    /// A failure reason with an optional causal tree.
    Error(ErrorReason),
    /// A success note.
    Success(SuccessReason),
}

impl Reason {
    /// Returns the reason message regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            Reason::Error(e) => e.message(),
            Reason::Success(s) => s.message(),
        }
    }

    /// Returns the metadata map regardless of kind.
    pub fn metadata(&self) -> &BTreeMap<String, MetaValue> {
        match self {
            Reason::Error(e) => e.metadata(),
            Reason::Success(s) => s.metadata(),
        }
    }

    /// Returns `true` if this reason is an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Reason::Error(_))
    }

    /// Returns `true` if this reason is a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Reason::Success(_))
    }
}

impl From<ErrorReason> for Reason {
    fn from(e: ErrorReason) -> Self {
        Reason::Error(e)
    }
}

impl From<SuccessReason> for Reason {
    fn from(s: SuccessReason) -> Self {
        Reason::Success(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_order_is_insertion_order() {
        let err = ErrorReason::new("root")
            .caused_by(ErrorReason::new("first"))
            .caused_by_all(vec![ErrorReason::new("second"), ErrorReason::new("third")]);

        let messages: Vec<&str> = err.causes().iter().map(ErrorReason::message).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_metadata_replaces_on_same_key() {
        let err = ErrorReason::new("e")
            .with_metadata("k", "old")
            .with_metadata("k", "new");

        assert_eq!(err.metadata().get("k"), Some(&MetaValue::from("new")));
    }

    #[test]
    fn test_reason_kind_predicates() {
        let e: Reason = ErrorReason::new("e").into();
        let s: Reason = SuccessReason::new("s").into();

        assert!(e.is_error() && !e.is_success());
        assert!(s.is_success() && !s.is_error());
        assert_eq!(e.message(), "e");
        assert_eq!(s.message(), "s");
    }
}
