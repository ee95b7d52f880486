use crate::core::Field;
use crate::input::{ContentCursor, Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use unicode_width::UnicodeWidthChar;

/// Multi-line text entry. Enter splits the current line; Ctrl+Enter submits
/// the form.
pub struct TextAreaInput {
    base: InputBase,
    /// Buffer — invariant: always at least one element.
    lines: Vec<String>,
    /// Cursor row (index into `lines`).
    row: usize,
    /// Cursor col (char index within `lines[row]`).
    col: usize,
}

fn char_count(line: &str) -> usize {
    line.chars().count()
}

fn byte_index_at_char(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl TextAreaInput {
    pub fn new(field: Field) -> Self {
        Self {
            base: InputBase::new(field),
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    fn current_line_len(&self) -> usize {
        char_count(&self.lines[self.row])
    }

    fn insert_char(&mut self, ch: char) {
        let byte = byte_index_at_char(&self.lines[self.row], self.col);
        self.lines[self.row].insert(byte, ch);
        self.col += 1;
    }

    /// Split `lines[row]` at `col`, keeping left on `row`, right on `row+1`.
    fn split_line(&mut self) {
        let col = self.col.min(self.current_line_len());
        let byte = byte_index_at_char(&self.lines[self.row], col);
        let right = self.lines[self.row][byte..].to_string();
        self.lines[self.row].truncate(byte);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, right);
    }

    /// Merge `lines[row]` into `lines[row-1]` (backspace at col=0).
    fn merge_with_prev(&mut self) {
        if self.row == 0 {
            return;
        }
        let prev_len = char_count(&self.lines[self.row - 1]);
        let current = self.lines.remove(self.row);
        self.row -= 1;
        self.col = prev_len;
        self.lines[self.row].push_str(&current);
    }

    /// Merge `lines[row+1]` into `lines[row]` (delete at end of line).
    fn merge_with_next(&mut self) {
        if self.row + 1 >= self.lines.len() {
            return;
        }
        let next = self.lines.remove(self.row + 1);
        self.lines[self.row].push_str(&next);
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let byte = byte_index_at_char(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(byte);
            self.col -= 1;
        } else {
            self.merge_with_prev();
        }
    }

    fn delete(&mut self) {
        if self.col < self.current_line_len() {
            let byte = byte_index_at_char(&self.lines[self.row], self.col);
            self.lines[self.row].remove(byte);
        } else {
            self.merge_with_next();
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn delete_word_on_line(&mut self) {
        if self.col == 0 {
            self.merge_with_prev();
            return;
        }

        let mut chars: Vec<char> = self.lines[self.row].chars().collect();
        let mut pos = self.col;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.lines[self.row] = chars.into_iter().collect();
        self.col = pos;
    }

    fn display_col(&self) -> usize {
        self.lines[self.row]
            .chars()
            .take(self.col.min(self.current_line_len()))
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
            .sum()
    }
}

impl Input for TextAreaInput {
    fn field(&self) -> Option<Field> {
        self.base.field
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.lines.join("\n")
    }

    fn set_value(&mut self, value: String) {
        self.lines = value.split('\n').map(String::from).collect();
        if self.lines.is_empty() {
            self.lines = vec![String::new()];
        }
        self.row = self.lines.len() - 1;
        self.col = self.current_line_len();
    }

    fn placeholder(&self) -> Option<&str> {
        self.base.placeholder.as_deref()
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Enter if modifiers.contains(KeyModifiers::CONTROL) => KeyResult::Submit,
            KeyCode::Enter => {
                self.split_line();
                KeyResult::Handled
            }
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.current_line_len();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if self.col < self.current_line_len() {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
                KeyResult::Handled
            }
            KeyCode::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.col = self.col.min(self.current_line_len());
                }
                KeyResult::Handled
            }
            KeyCode::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = self.col.min(self.current_line_len());
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.col = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.col = self.current_line_len();
                KeyResult::Handled
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<SpanLine> {
        self.lines
            .iter()
            .map(|line| vec![Span::new(line)])
            .collect()
    }

    fn block_label(&self) -> bool {
        true
    }

    fn content_cursor(&self) -> Option<ContentCursor> {
        Some(ContentCursor {
            row: self.row,
            col: self.display_col(),
        })
    }

    fn delete_word(&mut self) {
        self.delete_word_on_line();
    }
}

#[cfg(test)]
mod tests {
    use super::TextAreaInput;
    use crate::core::Field;
    use crate::input::{ContentCursor, Input, KeyResult};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_str(input: &mut TextAreaInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn enter_splits_the_line() {
        let mut input = TextAreaInput::new(Field::Message);
        type_str(&mut input, "hello there");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        for _ in 0..5 {
            input.handle_key(KeyCode::Right, KeyModifiers::NONE);
        }
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(input.value(), "hello\n there");
        assert_eq!(input.content_cursor(), Some(ContentCursor { row: 1, col: 0 }));
    }

    #[test]
    fn backspace_at_line_start_merges_up() {
        let mut input = TextAreaInput::new(Field::Message);
        type_str(&mut input, "hello");
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut input, "there");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "hellothere");
        assert_eq!(input.content_cursor(), Some(ContentCursor { row: 0, col: 5 }));
    }

    #[test]
    fn ctrl_enter_requests_submit() {
        let mut input = TextAreaInput::new(Field::Message);
        type_str(&mut input, "hello there");
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::CONTROL),
            KeyResult::Submit
        );
        // the buffer is untouched by the submit request
        assert_eq!(input.value(), "hello there");
    }

    #[test]
    fn empty_buffer_reads_as_empty_value() {
        let input = TextAreaInput::new(Field::Message);
        assert_eq!(input.value(), "");
        assert_eq!(input.render_content().len(), 1);
    }
}
