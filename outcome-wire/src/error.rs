//! Error types for the wire codec.

use thiserror::Error;

/// Errors raised while encoding or decoding wire envelopes.
#[derive(Debug, Error)]
pub enum WireCodecError {
    /// Binary encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// The bytes do not decode to the expected wire type. This is also how
    /// an unknown reason subtype tag surfaces: the decoder rejects the
    /// discriminant and the cause message is passed through untranslated.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type alias for wire codec operations.
pub type Result<T> = std::result::Result<T, WireCodecError>;
