pub mod button_input;
pub mod input;
pub mod text_input;
pub mod textarea_input;
pub mod validators;

pub use input::{ContentCursor, Input, InputBase, KeyResult};
