use crate::core::form::FormState;
use crate::core::form_engine::FormEngine;
use crate::input::Input;

pub struct AppState {
    pub form: FormState,
    pub inputs: Vec<Box<dyn Input>>,
    pub engine: FormEngine,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(mut inputs: Vec<Box<dyn Input>>) -> Self {
        let engine = FormEngine::new(&mut inputs);

        Self {
            form: FormState::new(),
            inputs,
            engine,
            should_exit: false,
        }
    }
}
