//! Form state snapshots and the pure transitions between them.
//!
//! [`transition`] never mutates its input: it returns the next snapshot
//! together with the side effect (if any) the caller has to run.

use crate::core::{FieldErrors, FieldId, FieldValues, validate};
use crate::state::submission::{Banner, FIX_ERRORS_MESSAGE, SAVED_MESSAGE, SubmissionState};
use crate::task::{SaveCompletion, SaveReceipt, SaveRequest, SaveTicket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFlags([bool; 4]);

impl TouchedFlags {
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.0[field.index()]
    }

    pub fn touch(&mut self, field: FieldId) {
        self.0[field.index()] = true;
    }

    pub fn touch_all(&mut self) {
        self.0 = [true; 4];
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|touched| !touched)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FieldValues,
    touched: TouchedFlags,
    errors: FieldErrors,
    submission: SubmissionState,
    last_receipt: Option<SaveReceipt>,
    next_ticket: SaveTicket,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: FieldId, value: String },
    FieldBlurred(FieldId),
    SubmitRequested,
    SaveSettled(SaveCompletion),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    Save(SaveRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: FormState,
    pub effect: Option<FormEffect>,
}

impl Transition {
    fn unchanged(state: &FormState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedFlags {
        &self.touched
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn last_receipt(&self) -> Option<&SaveReceipt> {
        self.last_receipt.as_ref()
    }

    /// Error to display for `field`: only once the field has been touched.
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if !self.touched.is_touched(field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    /// Revalidates from scratch on every call; touched flags play no part.
    pub fn is_submit_allowed(&self) -> bool {
        !self.submission.is_saving() && validate(&self.values).is_empty()
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        self.submission.banner()
    }
}

pub fn transition(state: &FormState, event: FormEvent) -> Transition {
    match event {
        FormEvent::FieldChanged { field, value } => field_changed(state, field, value),
        FormEvent::FieldBlurred(field) => field_blurred(state, field),
        FormEvent::SubmitRequested => submit_requested(state),
        FormEvent::SaveSettled(completion) => save_settled(state, completion),
    }
}

fn field_changed(state: &FormState, field: FieldId, value: String) -> Transition {
    let mut next = state.clone();
    next.values.set(field, value);

    // Validate the already-updated values, but only refresh this field's entry
    // so errors shown on other fields stay as they were.
    match validate(&next.values).shift_remove(&field) {
        Some(error) => {
            next.errors.insert(field, error);
        }
        None => {
            next.errors.shift_remove(&field);
        }
    }

    tracing::trace!(%field, has_error = next.errors.contains_key(&field), "field changed");
    Transition {
        state: next,
        effect: None,
    }
}

fn field_blurred(state: &FormState, field: FieldId) -> Transition {
    let mut next = state.clone();
    next.touched.touch(field);
    next.errors = validate(&next.values);
    tracing::debug!(%field, errors = next.errors.len(), "field blurred");
    Transition {
        state: next,
        effect: None,
    }
}

fn submit_requested(state: &FormState) -> Transition {
    if let Some(ticket) = state.submission.in_flight() {
        tracing::debug!(ticket, "submit ignored while a save is in flight");
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    next.touched.touch_all();
    next.errors = validate(&next.values);

    if !next.errors.is_empty() {
        tracing::debug!(errors = next.errors.len(), "submit blocked by validation errors");
        next.submission = SubmissionState::Failed(FIX_ERRORS_MESSAGE.to_string());
        return Transition {
            state: next,
            effect: None,
        };
    }

    let ticket = next.next_ticket;
    next.next_ticket = next.next_ticket.wrapping_add(1);
    next.submission = SubmissionState::Saving(ticket);
    tracing::info!(ticket, "save started");

    let request = SaveRequest {
        ticket,
        values: next.values.clone(),
    };
    Transition {
        state: next,
        effect: Some(FormEffect::Save(request)),
    }
}

fn save_settled(state: &FormState, completion: SaveCompletion) -> Transition {
    if state.submission.in_flight() != Some(completion.ticket) {
        tracing::debug!(ticket = completion.ticket, "ignoring completion for a save that is not in flight");
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    next.submission = match completion.outcome {
        Ok(receipt) => {
            tracing::info!(ticket = completion.ticket, "save succeeded");
            next.last_receipt = Some(receipt);
            SubmissionState::Succeeded(SAVED_MESSAGE.to_string())
        }
        Err(err) => {
            let reason = err.reason();
            tracing::warn!(ticket = completion.ticket, %reason, "save failed");
            SubmissionState::Failed(reason)
        }
    };

    Transition {
        state: next,
        effect: None,
    }
}
