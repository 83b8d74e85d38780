//! # Outcome Core
//!
//! A result-object model: success/failure outcomes carrying an ordered list
//! of human-readable reasons. Reasons are either errors, which may nest into
//! causal trees, or successes, which are always leaves. Both carry a
//! string-keyed metadata map.
//!
//! This crate holds only the in-memory model. The schema-stable mirror used
//! for binary transmission lives in the companion `outcome-wire` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome_core::{ErrorReason, Outcome, ValueOutcome};
//!
//! let outcome = Outcome::ok();
//! assert!(outcome.is_success());
//!
//! let failed = Outcome::fail("disk full").with_error(
//!     ErrorReason::new("write aborted").caused_by(ErrorReason::new("ENOSPC")),
//! );
//! assert!(failed.is_failed());
//!
//! let answer = ValueOutcome::ok(42);
//! assert_eq!(answer.value(), Ok(&42));
//! ```

pub mod error;
pub mod metadata;
pub mod outcome;
pub mod reason;

// Re-export main types for convenience
pub use error::OutcomeError;
pub use metadata::MetaValue;
pub use outcome::{Outcome, ValueOutcome};
pub use reason::{ErrorReason, Reason, SuccessReason};
