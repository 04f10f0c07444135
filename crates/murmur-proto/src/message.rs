//! Chat message payload.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{ProtocolError, Result};

/// A single chat message as exchanged over the wire.
///
/// Messages are immutable once built: the sender constructs one from its
/// current presentation attributes, and receivers append the decoded value to
/// their log without modification.
///
/// # Invariants
///
/// - `content` is opaque bytes. It is never re-validated as UTF-8 and must be
///   preserved exactly, including embedded control characters.
/// - An empty `role` means "no role badge"; `role_color` is only meaningful
///   when `role` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    /// Role badge text. Empty for no badge.
    #[serde(rename = "role")]
    pub role: String,

    /// Background color of the role badge.
    #[serde(rename = "roleColor")]
    pub role_color: String,

    /// Display name of the sender.
    #[serde(rename = "sender")]
    pub sender: String,

    /// Foreground color of the sender name.
    #[serde(rename = "userColor")]
    pub sender_color: String,

    /// Raw message body.
    #[serde(with = "content")]
    pub content: Vec<u8>,
}

impl ChatMessage {
    /// Encode as a JSON text frame.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    /// Decode from the bytes of one frame.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(ProtocolError::Decode)
    }

    /// Whether the message carries a role badge.
    pub fn has_role(&self) -> bool {
        !self.role.is_empty()
    }

    /// Message content as UTF-8 string (lossy conversion).
    pub fn content_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Serde adapter for the `content` field.
///
/// Writes standard padded base64. Reads base64, a JSON array of bytes, or
/// `null` (empty content).
mod content {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Encoded(String),
        Raw(Vec<u8>),
    }

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Vec::new()),
            Some(Repr::Encoded(text)) => STANDARD.decode(text).map_err(D::Error::custom),
            Some(Repr::Raw(bytes)) => Ok(bytes),
        }
    }
}
