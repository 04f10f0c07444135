//! Terminal UI for murmur
//!
//! A thin shell over [`murmur_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`murmur_app::Runtime`].
//!
//! This crate only handles terminal input, rendering, and wiring the
//! WebSocket connection into the event channel.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use murmur_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
