//! Protocol error types.

use thiserror::Error;

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while encoding or decoding wire messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Outgoing message could not be serialized.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// Incoming frame is not a valid chat message.
    #[error("failed to decode message: {0}")]
    Decode(#[source] serde_json::Error),
}
