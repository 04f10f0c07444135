//! Status bar
//!
//! Displays connection status, the identity outgoing messages will carry, and
//! the latest transient status message.

use murmur_app::ConnectionState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, ui::message};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnectionState::Connected => {
            Span::styled("Connected", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        },
        ConnectionState::Disconnected { .. } => {
            Span::styled("Disconnected", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        },
    };

    let mut spans = vec![Span::raw(" "), connection_status, Span::raw(" | as ")];

    // Preview of how our own messages will look
    spans.extend(message::header(&app.user().compose(Vec::<u8>::new())));

    if let Some(status) = app.status_message() {
        spans.push(Span::styled(format!(" | {status}"), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
