use crate::core::FieldId;
use crate::state::app::AppState;
use crate::state::focus::FocusTarget;
use crate::state::submission::BannerKind;
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;

pub const TITLE: &str = "Personal Info Form";
const HINT: &str = "Tab/Shift+Tab move  Enter save  Esc quit";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn render(&self, state: &AppState, _terminal_size: TerminalSize) -> RenderFrame {
        let theme = &self.theme;
        let controller = state.controller();
        let focus = state.focus();
        let mut frame = RenderFrame::default();

        frame.lines.push(vec![Span::styled(TITLE, theme.title)]);
        frame.lines.push(vec![]);

        for field in FieldId::ALL {
            let input = state.input(field);
            let value = controller.values().get(field);
            let focused = focus == FocusTarget::Field(field);

            if focused {
                frame.cursor = Some(CursorPos {
                    col: input.cursor_col(value),
                    row: frame.lines.len() as u16,
                });
            }
            frame.lines.push(input.draw(value, focused, theme));

            if let Some(error) = controller.visible_error(field) {
                frame
                    .lines
                    .push(vec![Span::styled(format!("    ! {error}"), theme.error)]);
            }
        }

        frame.lines.push(vec![]);
        frame.lines.push(self.button_line(state));

        if let Some(banner) = controller.banner() {
            let (glyph, style) = match banner.kind {
                BannerKind::Success => ("✔", theme.success),
                BannerKind::Error => ("✘", theme.error),
            };
            frame.lines.push(vec![]);
            frame
                .lines
                .push(vec![Span::styled(format!("  {glyph} {}", banner.text), style)]);
        }

        frame.lines.push(vec![]);
        frame.lines.push(vec![Span::styled(HINT, theme.hint)]);
        frame
    }

    fn button_line(&self, state: &AppState) -> SpanLine {
        let theme = &self.theme;
        let controller = state.controller();
        let saving = controller.submission().is_saving();

        let style = if !controller.is_submit_allowed() {
            theme.disabled_button
        } else if state.focus() == FocusTarget::SaveButton {
            theme.focused_button
        } else {
            theme.button
        };

        let label = if saving { " Saving... " } else { " Save " };
        let mut line = vec![Span::new("  "), Span::styled(format!("[{label}]"), style)];
        if saving {
            line.push(Span::new(" "));
            line.push(state.spinner().span());
        }
        line
    }
}
