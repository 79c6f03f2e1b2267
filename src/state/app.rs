use crate::core::FieldId;
use crate::state::controller::FormController;
use crate::state::focus::{FocusState, FocusTarget};
use crate::task::{SaveCompletion, SaveRequest};
use crate::terminal::KeyEvent;
use crate::ui::spinner::Spinner;
use crate::widgets::{FieldInput, KeyResult};

pub struct AppState {
    controller: FormController,
    focus: FocusState,
    inputs: Vec<FieldInput>,
    spinner: Spinner,
    should_exit: bool,
}

impl AppState {
    pub fn new(controller: FormController) -> Self {
        let mut inputs: Vec<FieldInput> = FieldId::ALL.into_iter().map(FieldInput::for_field).collect();
        let first = FieldId::ALL[0];
        inputs[first.index()].focus_end(controller.values().get(first));
        Self {
            controller,
            focus: FocusState::new(),
            inputs,
            spinner: Spinner::new(),
            should_exit: false,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn input(&self, field: FieldId) -> &FieldInput {
        &self.inputs[field.index()]
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn focus_next(&mut self) {
        self.blur_focused();
        self.focus.next();
        self.arrive_at_focus();
    }

    pub fn focus_prev(&mut self) {
        self.blur_focused();
        self.focus.prev();
        self.arrive_at_focus();
    }

    /// Enter on the Save button honours its disabled state; from inside a
    /// field the form is always submitted so validation feedback shows up.
    pub fn submit(&mut self) -> Option<SaveRequest> {
        if self.focus.current() == FocusTarget::SaveButton && !self.controller.is_submit_allowed() {
            tracing::debug!("save button is disabled");
            return None;
        }
        let request = self.controller.on_submit();
        if request.is_some() {
            self.spinner.reset();
        }
        request
    }

    /// Returns whether anything visible changed.
    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> bool {
        let Some(field) = self.focus.current_field() else {
            return false;
        };
        let current = self.controller.values().get(field).to_string();
        match self.inputs[field.index()].on_key(&current, key) {
            KeyResult::Edited(value) => {
                self.controller.on_field_change(field, value);
                true
            }
            KeyResult::Moved => true,
            KeyResult::Ignored => false,
        }
    }

    pub fn settle(&mut self, completion: SaveCompletion) -> bool {
        self.controller.settle(completion)
    }

    pub fn tick(&mut self) -> bool {
        if !self.controller.submission().is_saving() {
            return false;
        }
        self.spinner.tick();
        true
    }

    fn blur_focused(&mut self) {
        if let Some(field) = self.focus.current_field() {
            self.controller.on_field_blur(field);
        }
    }

    fn arrive_at_focus(&mut self) {
        if let Some(field) = self.focus.current_field() {
            let value = self.controller.values().get(field).to_string();
            self.inputs[field.index()].focus_end(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::core::{FieldId, FieldValues};
    use crate::state::controller::FormController;
    use crate::state::focus::FocusTarget;
    use crate::terminal::{KeyCode, KeyEvent};

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            state.dispatch_key_to_focused(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = AppState::new(FormController::new());
        type_text(&mut state, "Al");
        assert_eq!(state.controller().values().name, "Al");
        assert!(!state.controller().touched().is_touched(FieldId::Name));
    }

    #[test]
    fn leaving_a_field_blurs_it() {
        let mut state = AppState::new(FormController::new());
        state.focus_next();
        assert!(state.controller().touched().is_touched(FieldId::Name));
        assert_eq!(
            state.controller().visible_error(FieldId::Name),
            Some("Name is required.")
        );
        assert_eq!(state.focus(), FocusTarget::Field(FieldId::Password));
    }

    #[test]
    fn disabled_button_ignores_enter() {
        let mut state = AppState::new(FormController::new());
        for _ in 0..4 {
            state.focus_next();
        }
        assert_eq!(state.focus(), FocusTarget::SaveButton);
        assert!(state.submit().is_none());
        assert!(state.controller().banner().is_none());
    }

    #[test]
    fn enter_in_field_submits_even_when_invalid() {
        let mut state = AppState::new(FormController::new());
        assert!(state.submit().is_none());
        assert_eq!(
            state.controller().banner().map(|b| b.text),
            Some("Please fix the errors before saving.")
        );
    }

    #[test]
    fn enabled_button_starts_a_save() {
        let controller = FormController::prefilled(&FieldValues {
            name: "Al".to_string(),
            password: "abc123".to_string(),
            email: "a@b.com".to_string(),
            phone: "1234567890".to_string(),
        });
        let mut state = AppState::new(controller);
        for _ in 0..4 {
            state.focus_next();
        }
        assert!(state.submit().is_some());
        assert!(state.tick());
    }

    #[test]
    fn keys_on_button_are_ignored() {
        let mut state = AppState::new(FormController::new());
        for _ in 0..4 {
            state.focus_next();
        }
        assert!(!state.dispatch_key_to_focused(KeyEvent::plain(KeyCode::Char('x'))));
    }
}
