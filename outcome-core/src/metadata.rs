//! Metadata values attachable to reasons.
//!
//! Reasons carry a string-keyed metadata map whose values may be of several
//! primitive kinds. The wire layer flattens every value to its string form,
//! so `Display` here defines the canonical one-way coercion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A metadata value attached to a reason.
///
/// Values round-trip through the wire layer as strings: a `MetaValue::Int(7)`
/// sent over the wire comes back as `MetaValue::Str("7".into())`.
///
/// # Example
///
/// ```rust
/// use outcome_core::MetaValue;
///
/// let v = MetaValue::from(42i64);
/// assert_eq!(v.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    /// A string value.
    Str(String),
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Str(s) => f.write_str(s),
            MetaValue::Int(i) => write!(f, "{}", i),
            MetaValue::Float(x) => write!(f, "{}", x),
            MetaValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Str(s)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Str(s.to_owned())
    }
}

impl From<i64> for MetaValue {
    fn from(i: i64) -> Self {
        MetaValue::Int(i)
    }
}

impl From<i32> for MetaValue {
    fn from(i: i32) -> Self {
        MetaValue::Int(i64::from(i))
    }
}

impl From<u32> for MetaValue {
    fn from(i: u32) -> Self {
        MetaValue::Int(i64::from(i))
    }
}

impl From<f64> for MetaValue {
    fn from(x: f64) -> Self {
        MetaValue::Float(x)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_string() {
        // String values must not gain quotes when coerced.
        assert_eq!(MetaValue::from("value").to_string(), "value");
    }

    #[test]
    fn test_display_primitives() {
        assert_eq!(MetaValue::from(7i64).to_string(), "7");
        assert_eq!(MetaValue::from(true).to_string(), "true");
        assert_eq!(MetaValue::from(1.5f64).to_string(), "1.5");
    }
}
