use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form::FormAction;
use crate::core::form_event::FormEvent;
use crate::core::state::AppState;

#[derive(Debug, Clone)]
pub enum Effect {
    Emit(AppEvent),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                state.engine.move_focus(&mut state.inputs, 1);
                vec![]
            }
            Action::PrevInput => {
                state.engine.move_focus(&mut state.inputs, -1);
                vec![]
            }
            Action::Submit => Self::handle_submit(state),
            Action::DeleteWord => {
                let events = state.engine.handle_delete_word(&mut state.inputs, false);
                Self::apply_form_events(state, events)
            }
            Action::DeleteWordForward => {
                let events = state.engine.handle_delete_word(&mut state.inputs, true);
                Self::apply_form_events(state, events)
            }
            Action::InputKey(key_event) => {
                let events = state.engine.handle_key(&mut state.inputs, key_event);
                Self::apply_form_events(state, events)
            }
        }
    }

    fn apply_form_events(state: &mut AppState, events: Vec<FormEvent>) -> Vec<Effect> {
        let mut effects = Vec::new();

        for event in events {
            match event {
                FormEvent::ValueChanged { field, value } => {
                    state.form = state.form.apply(FormAction::Edit(field, value));
                }
                FormEvent::SubmitRequested => {
                    effects.extend(Self::handle_submit(state));
                }
            }
        }

        effects
    }

    fn handle_submit(state: &mut AppState) -> Vec<Effect> {
        state.form = state.form.apply(FormAction::Submit);

        let first_failed = state.form.errors().next().map(|(field, _)| field);
        match first_failed {
            Some(field) => {
                state.engine.focus_field(&mut state.inputs, field);
                vec![]
            }
            None => vec![Effect::Emit(AppEvent::Submitted)],
        }
    }
}
