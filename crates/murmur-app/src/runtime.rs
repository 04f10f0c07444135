//! Generic runtime for application orchestration.
//!
//! The Runtime is the single consumer of the merged event stream. It is the
//! only code that mutates [`App`], and it handles one event to completion
//! (state transition, sends, render) before pulling the next, so the view
//! model is never touched concurrently.

use murmur_proto::ChatMessage;

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and initial state.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run the main event loop until quit or until every event producer is
    /// gone.
    ///
    /// Failures to encode or send a message are reported to the user through
    /// the status line and do not end the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        while let Some(event) = self.driver.next_event().await {
            let actions = self.app.handle(event);
            if self.process_actions(actions).await? {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Send(message) => {
                        if let Err(message) = self.send(&message).await {
                            pending_actions.extend(self.app.handle(AppEvent::Error { message }));
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Encode and transmit one message.
    async fn send(&mut self, message: &ChatMessage) -> Result<(), String> {
        let frame = message.encode().map_err(|e| {
            tracing::error!("Failed to encode message: {e}");
            e.to_string()
        })?;

        self.driver.send_frame(frame).await.map_err(|e| {
            tracing::warn!("Failed to send message: {e}");
            format!("send failed: {e}")
        })
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
