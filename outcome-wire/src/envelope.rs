//! Binary envelope encoding for wire types.
//!
//! Thin wrapper around bincode. The encoded form writes each
//! [`WireReason`](crate::WireReason) with its variant index as the subtype
//! tag, so a decoded list reconstructs every element as its original
//! concrete kind. All buffers are owned `Vec<u8>`s and are dropped on every
//! exit path, including decode failure.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Result, WireCodecError};

/// Encode a wire value to compact binary format.
///
/// # Errors
///
/// Returns [`WireCodecError::Encode`] if the value cannot be encoded.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| WireCodecError::Encode(e.to_string()))
}

/// Decode a wire value from binary format.
///
/// # Errors
///
/// Returns [`WireCodecError::Decode`] if the data is malformed or carries
/// an unknown subtype tag. The underlying decoder message is preserved.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    bincode::deserialize(data).map_err(|e| WireCodecError::Decode(e.to_string()))
}
