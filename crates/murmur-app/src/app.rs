//! Application state machine.
//!
//! This module defines the [`App`] state machine, the single source of render
//! truth for the client. It consumes [`crate::AppEvent`] inputs and produces
//! [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Holds the message log in arrival order.
//! - Tracks the scroll offset and terminal dimensions.
//! - Owns the input line and the user's presentation attributes.
//! - Interprets slash commands and composes outgoing messages.
//!
//! # Invariants
//!
//! - The message log is append-only: no reordering, no drops, no dedup.
//! - `scroll_offset` is within `[0, max(0, len - 1)]` after every event.
//!
//! # Scrolling
//!
//! The offset steps one message at a time over the whole log, but the window
//! never starts past the last full page (`len - height`). While the offset is
//! in that last page the view does not move: from the bottom, the first
//! `height - 1` presses of Up only walk the offset back to the page start.

use std::ops::Range;

use murmur_proto::ChatMessage;

use crate::{
    AppAction, AppEvent, COMMAND_PREFIX, Command, ConnectionState, InputState, KeyInput,
    UserAttributes,
};

/// Columns taken by borders and padding around the input field.
const INPUT_CHROME_WIDTH: u16 = 7;
/// Rows not available to the chat pane (input line and status bar).
const CHAT_CHROME_HEIGHT: u16 = 2;

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state.
    state: ConnectionState,
    /// Messages in arrival order.
    messages: Vec<ChatMessage>,
    /// Index of the first message shown when the log overflows the pane.
    scroll_offset: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Input line.
    input: InputState,
    /// Outgoing presentation attributes.
    user: UserAttributes,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App for a connected session.
    pub fn new(user: UserAttributes) -> Self {
        Self {
            state: ConnectionState::Connected,
            messages: Vec::new(),
            scroll_offset: 0,
            terminal_size: (80, 24),
            input: InputState::new(),
            user,
            status_message: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.resize(cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::MessageReceived(message) => {
                self.append_message(message);
                vec![AppAction::Render]
            },
            AppEvent::ConnectionLost { reason } => {
                self.set_status(format!("Disconnected: {reason}"));
                self.state = ConnectionState::Disconnected { reason };
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.set_status(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Interrupt => vec![AppAction::Quit],
            KeyInput::Enter => self.submit(),
            KeyInput::Up => {
                self.scroll_up();
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.scroll_down();
                vec![AppAction::Render]
            },
            KeyInput::Char(_)
            | KeyInput::Backspace
            | KeyInput::Delete
            | KeyInput::Left
            | KeyInput::Right
            | KeyInput::Home
            | KeyInput::End => {
                self.input.edit(key);
                vec![AppAction::Render]
            },
        }
    }

    /// Submit the input line as a command or a message.
    fn submit(&mut self) -> Vec<AppAction> {
        if self.input.is_empty() {
            return vec![AppAction::Render];
        }

        let text = self.input.take();
        if let Some(command) = text.strip_prefix(COMMAND_PREFIX) {
            self.run_command(command);
            return vec![AppAction::Render];
        }

        self.status_message = None;
        vec![AppAction::Send(self.user.compose(text)), AppAction::Render]
    }

    fn run_command(&mut self, line: &str) {
        let command = Command::parse(line);
        tracing::debug!(?command, "running command");

        if let Err(e) = command.apply(&mut self.user, &mut rand::rng()) {
            self.set_status(e.to_string());
        }
    }

    /// Append a message to the log.
    ///
    /// The offset follows the log only when it was at the last valid position,
    /// so a user scrolled back stays where they are.
    pub fn append_message(&mut self, message: ChatMessage) {
        let was_at_bottom = self.scroll_offset + 1 >= self.messages.len();
        self.messages.push(message);
        if was_at_bottom {
            self.scroll_offset = self.max_offset();
        }
    }

    /// Move the offset one message towards the start. No-op at the top.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Move the offset one message towards the end. No-op at the bottom.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_offset() {
            self.scroll_offset += 1;
        }
    }

    /// Update the terminal dimensions.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.terminal_size = (cols, rows);
    }

    fn max_offset(&self) -> usize {
        self.messages.len().saturating_sub(1)
    }

    /// Range of messages visible in a pane `height` rows tall.
    ///
    /// The whole log when it fits. Otherwise a window starting at the scroll
    /// offset, pulled back so it never runs past the last message.
    pub fn visible_window(&self, height: usize) -> Range<usize> {
        let len = self.messages.len();
        if len <= height {
            return 0..len;
        }
        let start = self.scroll_offset.min(len - height);
        start..start + height
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Current connection state.
    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    /// All messages in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Rows available to the chat pane.
    pub fn chat_height(&self) -> u16 {
        self.terminal_size.1.saturating_sub(CHAT_CHROME_HEIGHT)
    }

    /// Columns available to the input field.
    pub fn input_width(&self) -> u16 {
        self.terminal_size.0.saturating_sub(INPUT_CHROME_WIDTH)
    }

    /// The input line.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Outgoing presentation attributes.
    pub fn user(&self) -> &UserAttributes {
        &self.user
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
