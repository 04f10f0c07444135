//! Application input events.
//!
//! This module defines [`AppEvent`], the closed set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two independent producers that share one channel:
//! - The terminal (keyboard, resize).
//! - The network receive loop (inbound messages, connection loss).
//!
//! A single consumer drains the channel, so events are applied one at a time
//! in arrival order.

use murmur_proto::ChatMessage;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Message received from the server.
    MessageReceived(ChatMessage),

    /// The receive loop ended. No further messages will arrive.
    ConnectionLost {
        /// Why the loop ended.
        reason: String,
    },

    /// Non-fatal error to surface to the user.
    Error {
        /// Error description.
        message: String,
    },
}
