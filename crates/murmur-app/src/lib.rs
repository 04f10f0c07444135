//! Application layer for murmur
//!
//! Pure state machines and a generic runtime for the chat client. Nothing in
//! this crate performs I/O: terminal and socket access live behind the
//! [`Driver`] trait so the same event loop runs in the TUI and in tests.
//!
//! # Components
//!
//! - [`App`]: view model and dispatcher (message log, scrolling, input line)
//! - [`Command`]: slash-command interpreter for presentation attributes
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Single-consumer event loop driving `App` through a `Driver`

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use command::{COMMAND_PREFIX, Command, CommandError, pale_color, parse_hex_color};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{InputState, KeyInput};
pub use runtime::Runtime;
pub use state::{ConnectionState, UserAttributes};
