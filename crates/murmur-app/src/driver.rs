//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal client and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for rendering,
///   tokio-tungstenite for the WebSocket
/// - **Tests**: scripted events and captured frames
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next event from any producer.
    ///
    /// Returns `None` once every producer has gone away.
    fn next_event(&mut self) -> impl Future<Output = Option<AppEvent>> + Send;

    /// Send one encoded message as a single frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is closed or the write fails.
    fn send_frame(&mut self, frame: String) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
