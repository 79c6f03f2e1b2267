use crate::core::{FieldErrors, FieldId, FieldValues};
use crate::state::form::{FormEffect, FormEvent, FormState, TouchedFlags, Transition, transition};
use crate::state::submission::{Banner, SubmissionState};
use crate::task::{SaveCompletion, SaveReceipt, SaveRequest};

/// Owns the current form snapshot and swaps in each transition's result.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from `values` as if each non-empty field had been typed in.
    pub fn prefilled(values: &FieldValues) -> Self {
        let mut controller = Self::new();
        for (field, value) in values.filled() {
            controller.on_field_change(field, value);
        }
        controller
    }

    pub fn on_field_change(&mut self, field: FieldId, value: impl Into<String>) {
        self.apply(FormEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    pub fn on_field_blur(&mut self, field: FieldId) {
        self.apply(FormEvent::FieldBlurred(field));
    }

    /// Returns the save the caller must run, if the submit went through.
    pub fn on_submit(&mut self) -> Option<SaveRequest> {
        match self.apply(FormEvent::SubmitRequested) {
            Some(FormEffect::Save(request)) => Some(request),
            None => None,
        }
    }

    /// Returns whether the completion changed anything.
    pub fn settle(&mut self, completion: SaveCompletion) -> bool {
        let before = self.state.submission().clone();
        self.apply(FormEvent::SaveSettled(completion));
        *self.state.submission() != before
    }

    pub fn is_submit_allowed(&self) -> bool {
        self.state.is_submit_allowed()
    }

    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        self.state.visible_error(field)
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        self.state.banner()
    }

    pub fn values(&self) -> &FieldValues {
        self.state.values()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.state.errors()
    }

    pub fn touched(&self) -> &TouchedFlags {
        self.state.touched()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.state.submission()
    }

    pub fn last_receipt(&self) -> Option<&SaveReceipt> {
        self.state.last_receipt()
    }

    fn apply(&mut self, event: FormEvent) -> Option<FormEffect> {
        let Transition { state, effect } = transition(&self.state, event);
        self.state = state;
        effect
    }
}
