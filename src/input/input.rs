use crate::core::Field;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::SpanLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// Cursor position within an input's rendered content: `row` is a content
/// line index, `col` a display-width offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentCursor {
    pub row: usize,
    pub col: usize,
}

pub trait Input: Send {
    fn field(&self) -> Option<Field>;
    fn label(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);
    fn placeholder(&self) -> Option<&str> {
        None
    }

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self) -> Vec<SpanLine>;

    /// Whether the label gets its own line above the content.
    fn block_label(&self) -> bool {
        false
    }

    fn content_cursor(&self) -> Option<ContentCursor>;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

pub struct InputBase {
    pub field: Option<Field>,
    pub label: String,
    pub focused: bool,
    pub placeholder: Option<String>,
}

impl InputBase {
    pub fn new(field: Field) -> Self {
        Self {
            field: Some(field),
            label: field.label().to_string(),
            focused: false,
            placeholder: None,
        }
    }

    pub fn unbound(label: impl Into<String>) -> Self {
        Self {
            field: None,
            label: label.into(),
            focused: false,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
