//! Chat area
//!
//! Displays the window of the message log selected by the scroll offset.

use murmur_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, List, ListItem, Padding},
};

use super::message;

/// Render the chat area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().padding(Padding::horizontal(1));

    let window = app.visible_window(usize::from(area.height));
    let items: Vec<ListItem> = app.messages()[window]
        .iter()
        .map(|msg| ListItem::new(message::format(msg)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
