use crate::core::Field;
use crate::input::{ContentCursor, Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use unicode_width::UnicodeWidthStr;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(field: Field) -> Self {
        Self {
            base: InputBase::new(field),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.base = self.base.with_placeholder(placeholder);
        self
    }

    fn handle_char(&mut self, ch: char) {
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        let byte_pos = if self.cursor_pos >= char_indices.len() {
            self.value.len()
        } else {
            char_indices[self.cursor_pos]
        };
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        let byte_pos = char_indices[self.cursor_pos - 1];
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn handle_delete(&mut self) {
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        if self.cursor_pos >= char_indices.len() {
            return;
        }
        self.value.remove(char_indices[self.cursor_pos]);
    }

    fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn move_word_left(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            pos -= 1;
        }

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            pos -= 1;
        }

        self.cursor_pos = pos;
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            pos += 1;
        }

        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            pos += 1;
        }

        self.cursor_pos = pos;
    }

    fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    fn move_end(&mut self) {
        self.cursor_pos = self.value.chars().count();
    }

    fn delete_word_impl(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
    }

    fn delete_word_forward_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos);
        }

        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos);
        }

        self.value = chars.into_iter().collect();
    }
}

impl Input for TextInput {
    fn field(&self) -> Option<Field> {
        self.base.field
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
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
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_left();
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_right();
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.move_home();
                KeyResult::Handled
            }
            KeyCode::End => {
                self.move_end();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<SpanLine> {
        vec![vec![Span::new(&self.value)]]
    }

    fn content_cursor(&self) -> Option<ContentCursor> {
        let col = self
            .value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.to_string().width())
            .sum();
        Some(ContentCursor { row: 0, col })
    }

    fn delete_word(&mut self) {
        self.delete_word_impl();
    }

    fn delete_word_forward(&mut self) {
        self.delete_word_forward_impl();
    }
}
