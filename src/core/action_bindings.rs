use crate::core::event::Action;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

pub struct ActionBindings {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionBindings {
    pub fn new() -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
        };
        manager.setup_default_bindings();
        manager
    }

    fn setup_default_bindings(&mut self) {
        self.bind(KeyBinding::key(KeyCode::Esc), Action::Exit);
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Action::Exit);

        self.bind(KeyBinding::key(KeyCode::Tab), Action::NextInput);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevInput,
        );

        self.bind(KeyBinding::ctrl(KeyCode::Backspace), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Char('w')), Action::DeleteWord);
        self.bind(KeyBinding::ctrl(KeyCode::Delete), Action::DeleteWordForward);
    }

    pub fn bind(&mut self, key: KeyBinding, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn handle_key(&self, key_event: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_key_event(key_event);
        self.bindings.get(&binding).cloned()
    }
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionBindings, KeyBinding};
    use crate::core::event::Action;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn default_bindings_cover_navigation_and_exit() {
        let bindings = ActionBindings::new();
        assert!(matches!(
            bindings.handle_key(&KeyEvent::key(KeyCode::Tab)),
            Some(Action::NextInput)
        ));
        assert!(matches!(
            bindings.handle_key(&KeyEvent::key(KeyCode::Esc)),
            Some(Action::Exit)
        ));
        assert!(matches!(
            bindings.handle_key(&KeyEvent::ctrl(KeyCode::Char('c'))),
            Some(Action::Exit)
        ));
    }

    #[test]
    fn plain_characters_are_unbound() {
        let bindings = ActionBindings::new();
        assert!(bindings
            .handle_key(&KeyEvent::key(KeyCode::Char('a')))
            .is_none());
    }

    #[test]
    fn unbind_removes_a_binding() {
        let mut bindings = ActionBindings::new();
        bindings.unbind(&KeyBinding::new(KeyCode::Tab, KeyModifiers::NONE));
        assert!(bindings.handle_key(&KeyEvent::key(KeyCode::Tab)).is_none());
    }
}
