use crate::ui::span::Span;
use crate::ui::style::{Color, Style};

const BRAILLE: &[char] = &['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: u8,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        let len = BRAILLE.len() as u8;
        self.frame = (self.frame + 1) % len;
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn glyph(&self) -> char {
        BRAILLE[self.frame as usize % BRAILLE.len()]
    }

    pub fn span(&self) -> Span {
        Span::styled(self.glyph().to_string(), Style::new().color(Color::Cyan))
    }
}
