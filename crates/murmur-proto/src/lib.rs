//! Wire protocol for murmur.
//!
//! Every WebSocket frame carries exactly one JSON-encoded [`ChatMessage`].
//! There is no envelope, no opcode, and no handshake beyond the WebSocket
//! upgrade itself: the server fans each frame out to every connected client.
//!
//! # Wire format
//!
//! ```json
//! { "role": "ADMIN", "roleColor": "#FF0000", "sender": "Bob",
//!   "userColor": "#00FF00", "content": "aGk=" }
//! ```
//!
//! `content` is the raw message body. It is written as standard padded base64,
//! matching how the existing server and clients encode byte slices, and read
//! back from either base64 or a plain JSON array of bytes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod errors;
mod message;

pub use errors::{ProtocolError, Result};
pub use message::ChatMessage;
