use crate::core::Field;
use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::form::Submission;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::input::Input;
use crate::input::button_input::ButtonInput;
use crate::input::text_input::TextInput;
use crate::input::textarea_input::TextAreaInput;
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use std::io;

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    theme: Theme,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(build_form()),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn tick(&mut self) -> bool {
        let mut processed_any = false;
        while let Some(event) = self.event_queue.next() {
            self.dispatch_event(event);
            processed_any = true;
        }
        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        self.renderer.draw(&self.state, &self.theme, terminal)
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.state.form.submission()
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                let action = self
                    .action_bindings
                    .handle_key(&key_event)
                    .unwrap_or(Action::InputKey(key_event));
                let effects = Reducer::reduce(&mut self.state, action);
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action);
                self.apply_effects(effects);
            }
            AppEvent::Submitted => {
                self.state.should_exit = true;
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_form() -> Vec<Box<dyn Input>> {
    vec![
        Box::new(TextInput::new(Field::FirstName).with_placeholder("Edd")),
        Box::new(TextInput::new(Field::LastName).with_placeholder("Burke")),
        Box::new(TextInput::new(Field::Email).with_placeholder("bluebill1049@hotmail.com")),
        Box::new(TextAreaInput::new(Field::Message)),
        Box::new(ButtonInput::new("Submit")),
    ]
}

#[cfg(test)]
mod tests {
    use super::{App, build_form};
    use crate::core::Field;
    use crate::terminal::{KeyCode, KeyEvent};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::key(code));
        app.tick();
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn form_has_four_fields_and_a_button() {
        let inputs = build_form();
        let fields: Vec<_> = inputs.iter().map(|input| input.field()).collect();
        assert_eq!(
            fields,
            [
                Some(Field::FirstName),
                Some(Field::LastName),
                Some(Field::Email),
                Some(Field::Message),
                None
            ]
        );
    }

    #[test]
    fn escape_exits_without_a_submission() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_exit());
        assert!(app.submission().is_none());
    }

    #[test]
    fn a_full_pass_through_the_form_submits_and_exits() {
        let mut app = App::new();
        type_str(&mut app, "Hannah");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Brog");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "han@gmail.com");
        press(&mut app, KeyCode::Enter);

        assert!(app.should_exit());
        let submission = app.submission().expect("submission");
        assert_eq!(submission.first_name, "Hannah");
        assert_eq!(submission.message, None);
    }

    #[test]
    fn failed_submit_keeps_the_app_running() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        assert!(!app.should_exit());
        assert_eq!(app.state.form.error_count(), 3);
    }
}
