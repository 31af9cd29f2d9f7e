//! Code edit/save flow for the HTML and CSS fields.
//!
//! Each field is a small state machine:
//!
//! ```text
//! Viewing --begin_edit--> Editing --save--> Viewing   (emits the new value)
//!                                 --cancel--> Viewing (emits nothing)
//! ```
//!
//! Saving commits the edit buffer and returns the new value exactly once;
//! the caller decides where it goes (the custom layout store, or just the
//! session's working copy). A field is recreated whenever the selected
//! preset changes, so an abandoned edit never leaks into another preset.

use std::fmt;

/// Language of a code field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeLanguage {
    /// Structural markup
    Html,
    /// Presentation stylesheet
    Css,
}

impl CodeLanguage {
    /// Short label shown in field titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a field shows its committed text or an edit buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// Read-only display of the committed value
    #[default]
    Viewing,
    /// Edit buffer is active
    Editing,
}

/// Multi-line text buffer with a cursor.
///
/// The cursor column counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextBuffer {
    /// Creates a buffer holding `text` with the cursor at the start.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        Self {
            lines,
            row: 0,
            col: 0,
        }
    }

    /// Full buffer content.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Buffer lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as `(row, column)`.
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let line = &mut self.lines[self.row];
        let idx = Self::byte_index(line, self.col);
        line.insert(idx, c);
        self.col += 1;
    }

    /// Inserts a string at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Splits the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let idx = Self::byte_index(line, self.col);
        let rest = line.split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let idx = Self::byte_index(line, self.col - 1);
            line.remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&current);
        }
    }

    /// Deletes the character under the cursor, joining lines at line end.
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let line = &mut self.lines[self.row];
            let idx = Self::byte_index(line, self.col);
            line.remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// Moves the cursor one character left, wrapping to the previous line.
    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    /// Moves the cursor one character right, wrapping to the next line.
    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Moves the cursor up a line, clamping the column.
    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Moves the cursor down a line, clamping the column.
    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Moves the cursor to the start of the line.
    pub fn move_home(&mut self) {
        self.col = 0;
    }

    /// Moves the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }
}

/// One editable code field (HTML or CSS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeField {
    language: CodeLanguage,
    committed: String,
    buffer: Option<TextBuffer>,
}

impl CodeField {
    /// Creates a field in the Viewing state showing `value`.
    #[must_use]
    pub fn new(language: CodeLanguage, value: impl Into<String>) -> Self {
        Self {
            language,
            committed: value.into(),
            buffer: None,
        }
    }

    /// Field language.
    #[must_use]
    pub const fn language(&self) -> CodeLanguage {
        self.language
    }

    /// Committed value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.committed
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> EditState {
        if self.buffer.is_some() {
            EditState::Editing
        } else {
            EditState::Viewing
        }
    }

    /// Returns true while an edit is in progress.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Edit buffer, present only while editing.
    #[must_use]
    pub const fn buffer(&self) -> Option<&TextBuffer> {
        self.buffer.as_ref()
    }

    /// Mutable edit buffer, present only while editing.
    pub fn buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        self.buffer.as_mut()
    }

    /// Enters Editing with the buffer seeded from the committed value.
    ///
    /// Does nothing if already editing.
    pub fn begin_edit(&mut self) {
        if self.buffer.is_none() {
            self.buffer = Some(TextBuffer::new(&self.committed));
        }
    }

    /// Commits the buffer and returns to Viewing.
    ///
    /// Returns the new value, or `None` when the field was not editing.
    pub fn save(&mut self) -> Option<String> {
        let buffer = self.buffer.take()?;
        self.committed = buffer.text();
        Some(self.committed.clone())
    }

    /// Discards the buffer and returns to Viewing.
    pub fn cancel(&mut self) {
        self.buffer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_viewing() {
        let field = CodeField::new(CodeLanguage::Html, "<p>hi</p>");
        assert_eq!(field.state(), EditState::Viewing);
        assert_eq!(field.value(), "<p>hi</p>");
        assert!(field.buffer().is_none());
    }

    #[test]
    fn test_edit_then_cancel_keeps_value_and_emits_nothing() {
        let mut field = CodeField::new(CodeLanguage::Css, "a{}");
        field.begin_edit();
        field.buffer_mut().unwrap().insert_str("changed");
        field.cancel();

        assert_eq!(field.state(), EditState::Viewing);
        assert_eq!(field.value(), "a{}");
        assert_eq!(field.save(), None);
    }

    #[test]
    fn test_edit_then_save_emits_once() {
        let mut field = CodeField::new(CodeLanguage::Html, "");
        field.begin_edit();
        field.buffer_mut().unwrap().insert_str("<div>X</div>");

        assert_eq!(field.save(), Some("<div>X</div>".to_string()));
        assert_eq!(field.save(), None);
        assert_eq!(field.value(), "<div>X</div>");
        assert_eq!(field.state(), EditState::Viewing);
    }

    #[test]
    fn test_begin_edit_twice_keeps_buffer() {
        let mut field = CodeField::new(CodeLanguage::Html, "a");
        field.begin_edit();
        field.buffer_mut().unwrap().move_end();
        field.buffer_mut().unwrap().insert_char('b');
        field.begin_edit();
        assert_eq!(field.buffer().unwrap().text(), "ab");
    }

    #[test]
    fn test_buffer_newline_and_backspace_join() {
        let mut buffer = TextBuffer::new("ab");
        buffer.move_right();
        buffer.insert_newline();
        assert_eq!(buffer.lines(), ["a", "b"]);
        assert_eq!(buffer.cursor(), (1, 0));

        buffer.backspace();
        assert_eq!(buffer.text(), "ab");
        assert_eq!(buffer.cursor(), (0, 1));
    }

    #[test]
    fn test_buffer_delete_joins_next_line() {
        let mut buffer = TextBuffer::new("x\ny");
        buffer.move_end();
        buffer.delete();
        assert_eq!(buffer.text(), "xy");
    }

    #[test]
    fn test_buffer_vertical_moves_clamp_column() {
        let mut buffer = TextBuffer::new("long line\nab");
        buffer.move_end();
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 2));
        buffer.move_up();
        assert_eq!(buffer.cursor(), (0, 2));
        buffer.move_down();
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 2));
    }

    #[test]
    fn test_buffer_handles_multibyte_chars() {
        let mut buffer = TextBuffer::new("é");
        buffer.move_end();
        buffer.insert_char('ü');
        assert_eq!(buffer.text(), "éü");
        buffer.move_left();
        buffer.delete();
        assert_eq!(buffer.text(), "é");
        buffer.backspace();
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_buffer_wraps_horizontally() {
        let mut buffer = TextBuffer::new("a\nb");
        buffer.move_right();
        buffer.move_right();
        assert_eq!(buffer.cursor(), (1, 0));
        buffer.move_left();
        assert_eq!(buffer.cursor(), (0, 1));
        buffer.move_home();
        buffer.move_left();
        assert_eq!(buffer.cursor(), (0, 0));
    }
}
