use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub label: Style,
    pub focused_label: Style,
    pub hint: Style,
    pub error: Style,
    pub success: Style,
    pub placeholder: Style,
    pub button: Style,
    pub focused_button: Style,
    pub disabled_button: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            label: Style::new(),
            focused_label: Style::new().color(Color::Cyan).bold(),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red),
            success: Style::new().color(Color::Green),
            placeholder: Style::new().color(Color::DarkGrey),
            button: Style::new().bold(),
            focused_button: Style::new().color(Color::Black).background(Color::Cyan).bold(),
            disabled_button: Style::new().color(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
