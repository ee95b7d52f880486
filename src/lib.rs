pub mod core;
pub mod input;
pub mod terminal;
pub mod ui;

pub use core::Field;
pub use core::app;
pub use core::event;
pub use core::event_queue;
pub use core::form;
pub use core::form_engine;
pub use core::form_event;
pub use core::reducer;
pub use core::state;
pub use core::validation;

pub use input::button_input;
pub use input::text_input;
pub use input::textarea_input;
pub use input::validators;

pub use terminal::terminal_event;

pub use ui::frame_json;
pub use ui::layout;
pub use ui::renderer;
pub use ui::span;
pub use ui::style;
pub use ui::theme;
