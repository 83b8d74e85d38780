//! # Outcome Wire
//!
//! Schema-stable wire mirror and binary codec for the `outcome-core` result
//! model. Domain outcomes are flattened into mirror records whose metadata
//! is already stringified, encoded with bincode for transmission or
//! persistence, and losslessly reconstructed on the receiving side.
//!
//! Conversions are pure, synchronous transformations over shared
//! references; nothing is mutated, logged, or retried, and independent
//! conversions may run on any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome_core::{ErrorReason, Outcome};
//! use outcome_wire::WireOutcome;
//!
//! let outcome = Outcome::ok().with_error(
//!     ErrorReason::new("request failed").caused_by(ErrorReason::new("timeout")),
//! );
//!
//! // Domain -> wire -> bytes
//! let bytes = WireOutcome::from_outcome(&outcome).to_bytes().unwrap();
//!
//! // Bytes -> wire -> domain
//! let restored = WireOutcome::from_bytes(&bytes).unwrap().to_outcome();
//! assert_eq!(restored, outcome);
//! ```

pub mod envelope;
pub mod error;
pub mod reason;
pub mod result;

// Re-export main types for convenience
pub use error::WireCodecError;
pub use reason::{WireError, WireReason, WireSuccess};
pub use result::{WireOutcome, WireValueOutcome};
