//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Network uses tokio-tungstenite
//! through [`murmur_client::Connection`].
//!
//! Terminal input runs in its own task and is forwarded into the same event
//! channel the network receive loop writes to, so the runtime sees a single
//! ordered stream.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use murmur_app::{App, AppEvent, Driver, KeyInput};
use murmur_client::{Connection, TransportError};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), and network
/// writes (WebSocket). Owns the consumer end of the event channel.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: mpsc::Receiver<AppEvent>,
    connection: Connection,
    input_task: JoinHandle<()>,
}

impl TerminalDriver {
    /// Enter the alternate screen and start forwarding terminal input.
    ///
    /// `events_tx` must feed `events`; the connection's receive loop is
    /// expected to hold another sender for the same channel.
    pub fn new(
        connection: Connection,
        events_tx: mpsc::Sender<AppEvent>,
        events: mpsc::Receiver<AppEvent>,
    ) -> Result<Self, TerminalError> {
        let size = crossterm::terminal::size()?;

        enable_raw_mode()?;
        let terminal = or_restore(
            || {
                stdout().execute(EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout()))
            },
            restore_terminal,
        )?;
        let input_task = tokio::spawn(forward_terminal_events(events_tx, size));

        Ok(Self { terminal, events, connection, input_task })
    }
}

/// Run `setup`, calling `restore` if it fails.
///
/// Raw mode is already on when the rest of the terminal setup runs, and no
/// `TerminalDriver` exists yet whose `Drop` could turn it off.
fn or_restore<T>(setup: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    setup().inspect_err(|_| restore())
}

/// Leave raw mode and the alternate screen. Errors are ignored since this
/// runs on the way out.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// Convert a crossterm key event to `KeyInput`.
fn convert_key(key: KeyEvent) -> Option<KeyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyInput::Interrupt),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

/// Forward keyboard and resize events into the event channel.
///
/// Starts with the current terminal size so the first render is laid out
/// correctly.
async fn forward_terminal_events(events: mpsc::Sender<AppEvent>, (cols, rows): (u16, u16)) {
    if events.send(AppEvent::Resize(cols, rows)).await.is_err() {
        return;
    }

    let mut stream = EventStream::new();
    while let Some(event) = stream.next().await {
        let app_event = match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match convert_key(key) {
                Some(key) => AppEvent::Key(key),
                None => continue,
            },
            Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
            Ok(_) => continue,
            Err(e) => {
                tracing::error!("terminal input: {e}");
                break;
            },
        };

        if events.send(app_event).await.is_err() {
            return;
        }
    }

    // Without terminal input the user has no way to quit
    let _ = events.send(AppEvent::Key(KeyInput::Interrupt)).await;
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn next_event(&mut self) -> Option<AppEvent> {
        self.events.recv().await
    }

    async fn send_frame(&mut self, frame: String) -> Result<(), Self::Error> {
        self.connection.send(frame).await.map_err(TerminalError::from)
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.connection.stop();
        self.input_task.abort();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}
