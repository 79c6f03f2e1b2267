use crate::task::SaveTicket;

pub const SAVED_MESSAGE: &str = "Saved successfully!";
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors before saving.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A save is in flight; only the completion carrying this ticket settles it.
    Saving(SaveTicket),
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    pub kind: BannerKind,
    pub text: &'a str,
}

impl SubmissionState {
    pub fn is_saving(&self) -> bool {
        matches!(self, SubmissionState::Saving(_))
    }

    pub fn in_flight(&self) -> Option<SaveTicket> {
        match self {
            SubmissionState::Saving(ticket) => Some(*ticket),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<Banner<'_>> {
        match self {
            SubmissionState::Idle | SubmissionState::Saving(_) => None,
            SubmissionState::Succeeded(text) => Some(Banner {
                kind: BannerKind::Success,
                text,
            }),
            SubmissionState::Failed(text) => Some(Banner {
                kind: BannerKind::Error,
                text,
            }),
        }
    }
}
