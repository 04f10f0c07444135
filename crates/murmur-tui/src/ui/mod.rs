//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into a frame.

mod chat;
mod input;
pub mod message;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Render the entire UI.
///
/// The chat pane takes [`App::chat_height`] rows, leaving one row for the
/// input line and one for the status bar.
pub fn render(frame: &mut Frame, app: &App) {
    const INPUT_HEIGHT: u16 = 1;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.chat_height()),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [chat_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, app, *chat_area);
    input::render(frame, app, *input_area);
    status::render(frame, app, *status_area);
}
