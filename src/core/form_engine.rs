use crate::core::Field;
use crate::core::form_event::FormEvent;
use crate::input::{Input, KeyResult};
use crate::terminal::KeyEvent;

/// Focus and key routing over the form's inputs. The engine owns only the
/// focus index; the inputs themselves live on the app state and are passed
/// into each call.
pub struct FormEngine {
    focus_index: Option<usize>,
}

impl FormEngine {
    pub fn new(inputs: &mut [Box<dyn Input>]) -> Self {
        let mut engine = Self { focus_index: None };
        if !inputs.is_empty() {
            engine.set_focus(inputs, Some(0));
        }
        engine
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    pub fn focused_field(&self, inputs: &[Box<dyn Input>]) -> Option<Field> {
        self.focus_index
            .and_then(|index| inputs.get(index))
            .and_then(|input| input.field())
    }

    pub fn move_focus(&mut self, inputs: &mut [Box<dyn Input>], direction: isize) {
        if inputs.is_empty() {
            return;
        }

        let current = self.focus_index.unwrap_or(0);
        let len = inputs.len() as isize;
        let next = ((current as isize + direction + len) % len) as usize;
        self.set_focus(inputs, Some(next));
    }

    pub fn set_focus(&mut self, inputs: &mut [Box<dyn Input>], new_index: Option<usize>) {
        if let Some(index) = self.focus_index {
            if let Some(input) = inputs.get_mut(index) {
                input.set_focused(false);
            }
        }

        if let Some(index) = new_index {
            if let Some(input) = inputs.get_mut(index) {
                input.set_focused(true);
            }
        }

        self.focus_index = new_index;
    }

    pub fn focus_field(&mut self, inputs: &mut [Box<dyn Input>], field: Field) {
        if let Some(index) = inputs.iter().position(|input| input.field() == Some(field)) {
            self.set_focus(inputs, Some(index));
        }
    }

    pub fn handle_key(&mut self, inputs: &mut [Box<dyn Input>], key: KeyEvent) -> Vec<FormEvent> {
        self.update_focused(inputs, |input| input.handle_key(key.code, key.modifiers))
    }

    pub fn handle_delete_word(
        &mut self,
        inputs: &mut [Box<dyn Input>],
        forward: bool,
    ) -> Vec<FormEvent> {
        self.update_focused(inputs, |input| {
            if forward {
                input.delete_word_forward();
            } else {
                input.delete_word();
            }
            KeyResult::Handled
        })
    }

    fn update_focused<F>(&mut self, inputs: &mut [Box<dyn Input>], update: F) -> Vec<FormEvent>
    where
        F: FnOnce(&mut dyn Input) -> KeyResult,
    {
        let Some(index) = self.focus_index else {
            return vec![];
        };

        let Some(input) = inputs.get_mut(index) else {
            return vec![];
        };

        let before = input.value();
        let result = update(input.as_mut());
        let after = input.value();

        let mut events = Vec::new();

        if before != after {
            if let Some(field) = input.field() {
                events.push(FormEvent::ValueChanged {
                    field,
                    value: after,
                });
            }
        }

        if matches!(result, KeyResult::Submit) {
            events.push(FormEvent::SubmitRequested);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::FormEngine;
    use crate::core::Field;
    use crate::core::form_event::FormEvent;
    use crate::input::Input;
    use crate::input::button_input::ButtonInput;
    use crate::input::text_input::TextInput;
    use crate::terminal::{KeyCode, KeyEvent};

    fn inputs() -> Vec<Box<dyn Input>> {
        vec![
            Box::new(TextInput::new(Field::FirstName)),
            Box::new(TextInput::new(Field::LastName)),
            Box::new(ButtonInput::new("Submit")),
        ]
    }

    #[test]
    fn construction_focuses_the_first_input() {
        let mut inputs = inputs();
        let engine = FormEngine::new(&mut inputs);
        assert_eq!(engine.focus_index(), Some(0));
        assert!(inputs[0].is_focused());
        assert!(!inputs[1].is_focused());
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut inputs = inputs();
        let mut engine = FormEngine::new(&mut inputs);
        engine.move_focus(&mut inputs, -1);
        assert_eq!(engine.focus_index(), Some(2));
        engine.move_focus(&mut inputs, 1);
        assert_eq!(engine.focus_index(), Some(0));
    }

    #[test]
    fn typing_emits_value_changed_for_the_focused_field() {
        let mut inputs = inputs();
        let mut engine = FormEngine::new(&mut inputs);
        let events = engine.handle_key(&mut inputs, KeyEvent::key(KeyCode::Char('A')));
        assert_eq!(
            events,
            vec![FormEvent::ValueChanged {
                field: Field::FirstName,
                value: "A".to_string(),
            }]
        );
    }

    #[test]
    fn movement_keys_emit_nothing() {
        let mut inputs = inputs();
        let mut engine = FormEngine::new(&mut inputs);
        let events = engine.handle_key(&mut inputs, KeyEvent::key(KeyCode::Left));
        assert!(events.is_empty());
    }

    #[test]
    fn enter_on_the_button_requests_submit_without_value_change() {
        let mut inputs = inputs();
        let mut engine = FormEngine::new(&mut inputs);
        engine.set_focus(&mut inputs, Some(2));
        let events = engine.handle_key(&mut inputs, KeyEvent::key(KeyCode::Enter));
        assert_eq!(events, vec![FormEvent::SubmitRequested]);
    }

    #[test]
    fn focus_field_targets_the_backing_input() {
        let mut inputs = inputs();
        let mut engine = FormEngine::new(&mut inputs);
        engine.focus_field(&mut inputs, Field::LastName);
        assert_eq!(engine.focus_index(), Some(1));
        assert_eq!(engine.focused_field(&inputs), Some(Field::LastName));
    }
}
