//! Wire mirrors of the domain reasons.
//!
//! `WireError` and `WireSuccess` are schema-stable shadows of
//! [`ErrorReason`] and [`SuccessReason`] with metadata already flattened to
//! strings. `WireReason` is the polymorphic envelope that lets one ordered
//! list mix both kinds and keep each element's concrete kind through a
//! binary round trip.
//!
//! # Wire compatibility
//!
//! bincode encodes the serde variant index of `WireReason` as the subtype
//! tag and relies on struct field order for field positions. Both are
//! permanent external contracts: never reorder or remove variants or
//! fields of the types in this module; only append.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use outcome_core::{ErrorReason, MetaValue, Reason, SuccessReason};

/// Serializable mirror of an [`ErrorReason`].
///
/// `causes` holds `WireError`, not [`WireReason`]: causation is defined only
/// over errors, never successes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    /// The error message.
    pub message: String,

    /// Metadata with values already coerced to strings.
    pub metadata: BTreeMap<String, String>,

    /// Nested causes, in the order they were attached to the domain error.
    pub causes: Vec<WireError>,
}

impl WireError {
    /// Create a wire error with a message and no metadata or causes.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    /// Convert a domain error into its wire mirror.
    ///
    /// Each metadata value is flattened to its string form, and the causal
    /// tree is converted depth-first with child order preserved exactly.
    /// Recursion depth is bounded only by the call stack, so a
    /// pathologically deep cause chain can exhaust it; chains built through
    /// the domain API are acyclic, so no cycle detection is performed.
    pub fn from_error(error: &ErrorReason) -> Self {
        Self {
            message: error.message().to_owned(),
            metadata: stringify_metadata(error.metadata()),
            causes: error.causes().iter().map(WireError::from_error).collect(),
        }
    }

    /// Convert this wire error back into a domain error.
    ///
    /// Metadata entries are attached one by one through `with_metadata`, so
    /// reconstructed values are plain strings. Shares the recursion-depth
    /// caveat of [`WireError::from_error`].
    pub fn to_error(&self) -> ErrorReason {
        let mut error = ErrorReason::new(self.message.clone());
        for (key, value) in &self.metadata {
            error = error.with_metadata(key.clone(), value.clone());
        }
        error.caused_by_all(self.causes.iter().map(WireError::to_error))
    }
}

/// Serializable mirror of a [`SuccessReason`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSuccess {
    /// The success message.
    pub message: String,

    /// Metadata with values already coerced to strings.
    pub metadata: BTreeMap<String, String>,
}

impl WireSuccess {
    /// Create a wire success with a message and no metadata.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Convert a domain success into its wire mirror.
    pub fn from_success(success: &SuccessReason) -> Self {
        Self {
            message: success.message().to_owned(),
            metadata: stringify_metadata(success.metadata()),
        }
    }

    /// Convert this wire success back into a domain success.
    pub fn to_success(&self) -> SuccessReason {
        let mut success = SuccessReason::new(self.message.clone());
        for (key, value) in &self.metadata {
            success = success.with_metadata(key.clone(), value.clone());
        }
        success
    }
}

/// A wire reason of either kind.
///
/// The variant order here is the permanent subtype tag assignment
/// (`Error` = 0, `Success` = 1); see the module docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireReason {
    /// An error-kind reason.
    Error(WireError),
    /// A success-kind reason.
    Success(WireSuccess),
}

impl WireReason {
    /// Convert a domain reason of either kind into its wire mirror.
    pub fn from_reason(reason: &Reason) -> Self {
        match reason {
            Reason::Error(e) => WireReason::Error(WireError::from_error(e)),
            Reason::Success(s) => WireReason::Success(WireSuccess::from_success(s)),
        }
    }

    /// Convert this wire reason back into a domain reason, preserving its
    /// concrete kind.
    pub fn to_reason(&self) -> Reason {
        match self {
            WireReason::Error(e) => Reason::Error(e.to_error()),
            WireReason::Success(s) => Reason::Success(s.to_success()),
        }
    }

    /// Returns the reason message regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            WireReason::Error(e) => &e.message,
            WireReason::Success(s) => &s.message,
        }
    }

    /// Returns `true` if this reason is an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, WireReason::Error(_))
    }
}

fn stringify_metadata(metadata: &BTreeMap<String, MetaValue>) -> BTreeMap<String, String> {
    metadata
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}
