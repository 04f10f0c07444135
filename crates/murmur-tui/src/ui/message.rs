//! Chat line formatting
//!
//! Turns one [`ChatMessage`] into a styled line:
//!
//! - without a role: `sender: content`
//! - with a role: ` ROLE ` badge, one column of margin, then `sender: content`
//!
//! The badge is white on the role color; the sender name is drawn in the
//! sender color. Content is shown as-is: no wrapping, truncation, or
//! sanitizing.

use std::str::FromStr;

use murmur_proto::ChatMessage;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Format a message as a single styled line.
pub fn format(message: &ChatMessage) -> Line<'static> {
    let mut spans = header(message);
    spans.push(Span::raw(format!(": {}", message.content_str())));
    Line::from(spans)
}

/// The role badge (if any) and the colored sender name, without the body.
pub fn header(message: &ChatMessage) -> Vec<Span<'static>> {
    let sender = Span::styled(
        message.sender.clone(),
        Style::default().fg(parse_color(&message.sender_color)),
    );

    if !message.has_role() {
        return vec![sender];
    }

    let badge = Span::styled(
        format!(" {} ", message.role),
        Style::default().fg(Color::White).bg(parse_color(&message.role_color)),
    );

    vec![badge, Span::raw(" "), sender]
}

/// Parse a wire color. Unknown values render with the terminal default.
fn parse_color(value: &str) -> Color {
    Color::from_str(value).unwrap_or(Color::Reset)
}
