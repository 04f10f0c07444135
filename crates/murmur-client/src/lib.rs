//! Network bridge for murmur.
//!
//! Owns the WebSocket connection. Outgoing frames are written by the event
//! loop through [`transport::Connection::send`]; inbound frames are read by an
//! independent task that decodes them and injects
//! [`murmur_app::AppEvent`]s into the event loop's channel. The bridge never
//! touches the application state directly.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod transport;

pub use transport::{Connection, TransportConfig, TransportError, connect, connect_with_config};
