use crate::core::Field;
use crate::input::{ContentCursor, Input, InputBase, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::{Span, SpanLine};

/// The submit button. Not backed by a form field; activating it requests a
/// whole-form submit.
pub struct ButtonInput {
    base: InputBase,
}

impl ButtonInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: InputBase::unbound(label),
        }
    }
}

impl Input for ButtonInput {
    fn field(&self) -> Option<Field> {
        None
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        String::new()
    }

    fn set_value(&mut self, _value: String) {}

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Vec<SpanLine> {
        vec![vec![Span::new(format!("[ {} ]", self.base.label))]]
    }

    fn content_cursor(&self) -> Option<ContentCursor> {
        None
    }
}
