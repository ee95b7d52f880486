use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub hint: Style,
    pub label: Style,
    pub focused: Style,
    pub placeholder: Style,
    pub error: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            header: Style::new().color(Color::Cyan).bold(),
            hint: Style::new().color(Color::DarkGrey),
            label: Style::new(),
            focused: Style::new().bold(),
            placeholder: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
        }
    }
}
