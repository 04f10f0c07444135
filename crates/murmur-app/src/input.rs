//! Terminal-agnostic keyboard input and the input line buffer.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit the input line).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (scroll the log up).
    Up,
    /// Down arrow key (scroll the log down).
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
    /// Ctrl-C (quit).
    Interrupt,
}

/// Single-line text input.
///
/// The cursor counts characters, not bytes, so multi-byte input edits
/// correctly.
#[derive(Debug, Clone)]
pub struct InputState {
    buffer: String,
    cursor: usize,
    char_limit: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Maximum characters accepted on one line.
    pub const CHAR_LIMIT: usize = 156;

    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::with_char_limit(Self::CHAR_LIMIT)
    }

    /// Create an empty input state accepting at most `char_limit` characters.
    pub fn with_char_limit(char_limit: usize) -> Self {
        Self { buffer: String::new(), cursor: 0, char_limit }
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the buffer contents, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Apply an editing key. Submit, scrolling, and quit keys are ignored.
    pub fn edit(&mut self, key: KeyInput) {
        match key {
            KeyInput::Char(c) => self.insert(c),
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at(self.cursor);
                }
            },
            KeyInput::Delete => self.remove_at(self.cursor),
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.len(),
            KeyInput::Enter | KeyInput::Up | KeyInput::Down | KeyInput::Interrupt => {},
        }
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer.char_indices().nth(char_idx).map_or(self.buffer.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        if c.is_control() || self.len() >= self.char_limit {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, c);
        self.cursor += 1;
    }

    fn remove_at(&mut self, char_idx: usize) {
        if char_idx < self.len() {
            let idx = self.byte_index(char_idx);
            self.buffer.remove(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::new();
        for c in text.chars() {
            input.edit(KeyInput::Char(c));
        }
        input
    }

    #[test]
    fn char_input_adds_to_buffer() {
        let input = typed("hi");

        assert_eq!(input.buffer(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char() {
        let mut input = typed("ab");
        input.edit(KeyInput::Backspace);

        assert_eq!(input.buffer(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn delete_removes_char_at_cursor() {
        let mut input = typed("abc");
        input.edit(KeyInput::Home);
        input.edit(KeyInput::Delete);

        assert_eq!(input.buffer(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_movement() {
        let mut input = typed("abc");

        input.edit(KeyInput::Home);
        assert_eq!(input.cursor(), 0);

        input.edit(KeyInput::Left);
        assert_eq!(input.cursor(), 0);

        input.edit(KeyInput::End);
        assert_eq!(input.cursor(), 3);

        input.edit(KeyInput::Right);
        assert_eq!(input.cursor(), 3);

        input.edit(KeyInput::Left);
        input.edit(KeyInput::Char('X'));
        assert_eq!(input.buffer(), "abXc");
    }

    #[test]
    fn multibyte_editing() {
        let mut input = typed("héé");
        input.edit(KeyInput::Left);
        input.edit(KeyInput::Backspace);

        assert_eq!(input.buffer(), "hé");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut input = InputState::with_char_limit(3);
        for c in "abcdef".chars() {
            input.edit(KeyInput::Char(c));
        }
        assert_eq!(input.buffer(), "abc");
    }

    #[test]
    fn take_clears_buffer() {
        let mut input = typed("test");

        assert_eq!(input.take(), "test");
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn non_editing_keys_are_ignored() {
        let mut input = typed("x");

        input.edit(KeyInput::Enter);
        input.edit(KeyInput::Up);
        input.edit(KeyInput::Interrupt);
        assert_eq!(input.buffer(), "x");
        assert_eq!(input.cursor(), 1);
    }
}
