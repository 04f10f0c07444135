//! Input line
//!
//! Displays the input buffer with cursor. Long input scrolls horizontally so
//! the cursor stays inside the field. Scrolling and cursor placement are
//! measured in display columns, so wide characters take two cells.

use murmur_app::{App, InputState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const PROMPT: &str = "> ";
const PROMPT_WIDTH: u16 = 2;
const PADDING: u16 = 1;
const PLACEHOLDER: &str = "Type your message...";

/// Render the input line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let input = app.input();
    let available = area.width.saturating_sub(PROMPT_WIDTH + 2 * PADDING);
    let field_width = usize::from(available.min(app.input_width()).max(1));
    let start = scroll_start(input, field_width);

    let text = if input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(visible_text(input, start, field_width))
    };
    let line = Line::from(vec![Span::raw(" "), Span::raw(PROMPT), text]);

    frame.render_widget(Paragraph::new(line), area);

    let cursor_offset = cursor_column(input, start) as u16;
    let cursor_x = area.x.saturating_add(PADDING + PROMPT_WIDTH).saturating_add(cursor_offset);
    let max_x = area.x.saturating_add(area.width).saturating_sub(1);

    frame.set_cursor_position((cursor_x.min(max_x), area.y));
}

fn char_width(c: char) -> usize {
    Span::raw(c.to_string()).width()
}

/// First visible character such that the text before the cursor plus the
/// cursor cell fit in `width` columns.
fn scroll_start(input: &InputState, width: usize) -> usize {
    let budget = width.saturating_sub(1);
    let before_cursor: Vec<char> = input.buffer().chars().take(input.cursor()).collect();

    let mut start = before_cursor.len();
    let mut used = 0;
    for c in before_cursor.iter().rev() {
        let w = char_width(*c);
        if used + w > budget {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

/// Characters from `start` that fit in `width` columns.
fn visible_text(input: &InputState, start: usize, width: usize) -> String {
    let mut used = 0;
    input
        .buffer()
        .chars()
        .skip(start)
        .take_while(|c| {
            used += char_width(*c);
            used <= width
        })
        .collect()
}

/// Columns between the first visible character and the cursor.
fn cursor_column(input: &InputState, start: usize) -> usize {
    input.buffer().chars().take(input.cursor()).skip(start).map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use murmur_app::KeyInput;

    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.edit(KeyInput::Char(c));
        }
        input
    }

    #[test]
    fn short_input_is_not_scrolled() {
        let input = typed("hello");

        assert_eq!(scroll_start(&input, 10), 0);
        assert_eq!(cursor_column(&input, 0), 5);
    }

    #[test]
    fn long_input_keeps_cursor_visible() {
        let input = typed("abcdefghij");
        // Cursor at 10, 5 columns: characters 6..10 plus the cursor cell.
        assert_eq!(scroll_start(&input, 5), 6);
        assert_eq!(visible_text(&input, 6, 5), "ghij");
    }

    #[test]
    fn wide_characters_count_two_columns() {
        let input = typed("日本語");

        assert_eq!(scroll_start(&input, 20), 0);
        assert_eq!(cursor_column(&input, 0), 6);
    }

    #[test]
    fn wide_input_scrolls_by_display_width() {
        let input = typed("日本語テキスト");

        // 5 columns leave 4 before the cursor: two wide characters.
        let start = scroll_start(&input, 5);
        assert_eq!(start, 5);
        assert_eq!(cursor_column(&input, start), 4);
        assert_eq!(visible_text(&input, start, 5), "スト");
    }

    #[test]
    fn cursor_in_middle_of_wide_text() {
        let mut input = typed("a日b");
        input.edit(KeyInput::Left);

        assert_eq!(cursor_column(&input, 0), 3);
    }
}
