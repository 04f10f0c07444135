//! Observable application state types.
//!
//! [`UserAttributes`] is the local participant's outgoing presentation: the
//! name, role badge, and colors stamped onto every message this client sends.
//! It is changed only by slash commands typed locally, never by inbound
//! traffic.

use murmur_proto::ChatMessage;
use rand::Rng;

use crate::pale_color;

/// Connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Receive loop running.
    Connected,
    /// Receive loop ended. The UI stays interactive but receives nothing.
    Disconnected {
        /// Why the connection was lost.
        reason: String,
    },
}

/// Presentation attributes of the local user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttributes {
    /// Display name.
    pub username: String,
    /// Foreground color of the display name (`#RRGGBB`).
    pub username_color: String,
    /// Role badge text, upper-cased. Empty for no badge.
    pub role: String,
    /// Background color of the role badge (`#RRGGBB`).
    pub role_color: String,
}

impl UserAttributes {
    /// Name used until the user picks one with `/nick`.
    pub const DEFAULT_USERNAME: &'static str = "Anonymous";

    /// Create attributes with the given name and one color for both the name
    /// and the role badge.
    pub fn new(username: impl Into<String>, color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            username: username.into(),
            username_color: color.clone(),
            role: String::new(),
            role_color: color,
        }
    }

    /// Default attributes with a fresh pale color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Self::DEFAULT_USERNAME, pale_color(rng))
    }

    /// Build an outgoing message carrying these attributes.
    pub fn compose(&self, content: impl Into<Vec<u8>>) -> ChatMessage {
        ChatMessage {
            role: self.role.clone(),
            role_color: self.role_color.clone(),
            sender: self.username.clone(),
            sender_color: self.username_color.clone(),
            content: content.into(),
        }
    }
}

impl Default for UserAttributes {
    fn default() -> Self {
        Self::random(&mut rand::rng())
    }
}
