use super::text_edit;
use crate::core::FieldId;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// The value changed; the new text is attached.
    Edited(String),
    /// Only the cursor moved.
    Moved,
    Ignored,
}

/// Editing and drawing for one form field. The value itself lives in the
/// form state; this only keeps the cursor and presentation details.
#[derive(Debug, Clone)]
pub struct FieldInput {
    label: &'static str,
    placeholder: &'static str,
    masked: bool,
    cursor: usize,
}

impl FieldInput {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            masked: false,
            cursor: 0,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn for_field(field: FieldId) -> Self {
        match field {
            FieldId::Name => Self::new("Name", "Your full name"),
            FieldId::Password => Self::new("Password", "At least 6 chars and a digit").masked(),
            FieldId::Email => Self::new("Email", "you@example.com"),
            FieldId::Phone => Self::new("Phone", "Digits only, 10-15 chars"),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Places the cursor at the end of `value`, used when focus arrives.
    pub fn focus_end(&mut self, value: &str) {
        self.cursor = text_edit::char_count(value);
    }

    pub fn on_key(&mut self, value: &str, key: KeyEvent) -> KeyResult {
        let mut text = value.to_string();
        self.cursor = text_edit::clamp_cursor(self.cursor, &text);

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let edited = match key.code {
            KeyCode::Char('w') if ctrl => text_edit::delete_word_left(&mut text, &mut self.cursor),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                return KeyResult::Ignored;
            }
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut text, &mut self.cursor, ch);
                true
            }
            KeyCode::Backspace => text_edit::backspace_char(&mut text, &mut self.cursor),
            KeyCode::Delete => text_edit::delete_char(&mut text, &mut self.cursor),
            KeyCode::Left => {
                return moved(text_edit::move_left(&mut self.cursor, &text));
            }
            KeyCode::Right => {
                return moved(text_edit::move_right(&mut self.cursor, &text));
            }
            KeyCode::Home => {
                let changed = self.cursor != 0;
                self.cursor = 0;
                return moved(changed);
            }
            KeyCode::End => {
                let end = text_edit::char_count(&text);
                let changed = self.cursor != end;
                self.cursor = end;
                return moved(changed);
            }
            _ => return KeyResult::Ignored,
        };

        if edited {
            KeyResult::Edited(text)
        } else {
            KeyResult::Ignored
        }
    }

    pub fn draw(&self, value: &str, focused: bool, theme: &Theme) -> SpanLine {
        let label_style = if focused {
            theme.focused_label
        } else {
            theme.label
        };
        let marker = if focused { "› " } else { "  " };
        let mut line = vec![Span::styled(
            format!("{marker}{:<width$}", self.label, width = LABEL_WIDTH),
            label_style,
        )];

        if value.is_empty() {
            line.push(Span::styled(self.placeholder, theme.placeholder));
        } else {
            line.push(Span::new(self.display_value(value)));
        }
        line
    }

    /// Column of the text cursor within the drawn line.
    pub fn cursor_col(&self, value: &str) -> u16 {
        let cursor = text_edit::clamp_cursor(self.cursor, value);
        let before: String = self.display_value(value).chars().take(cursor).collect();
        let prefix = 2 + LABEL_WIDTH.max(self.label.len());
        (prefix + UnicodeWidthStr::width(before.as_str())) as u16
    }

    fn display_value(&self, value: &str) -> String {
        if self.masked {
            "*".repeat(text_edit::char_count(value))
        } else {
            value.to_string()
        }
    }
}

fn moved(changed: bool) -> KeyResult {
    if changed {
        KeyResult::Moved
    } else {
        KeyResult::Ignored
    }
}
