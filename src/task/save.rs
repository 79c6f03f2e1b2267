use crate::core::FieldValues;
use serde::Serialize;
use std::thread;
use std::time::Duration;

pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1200);
pub const DEFAULT_REJECTED_NAME: &str = "error";

/// Identifies one save attempt so its completion can be matched to it.
pub type SaveTicket = u64;

pub type SaveOutcome = Result<SaveReceipt, SaveError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    pub status: String,
    pub data: FieldValues,
}

impl SaveReceipt {
    pub fn ok(data: FieldValues) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("{0}")]
    Rejected(String),
    #[error("Save failed.")]
    Unknown,
}

impl SaveError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Rejected(reason)
        }
    }

    /// Text shown to the user.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub ticket: SaveTicket,
    pub values: FieldValues,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCompletion {
    pub ticket: SaveTicket,
    pub outcome: SaveOutcome,
}

/// The external save collaborator. Implementations may block; they run on a
/// worker thread owned by the executor.
pub trait SaveBackend: Send + Sync + 'static {
    fn save(&self, values: &FieldValues) -> SaveOutcome;
}

/// Stand-in for a network call: waits, then rejects one magic name.
#[derive(Debug, Clone)]
pub struct FakeSave {
    delay: Duration,
    rejected_name: String,
}

impl FakeSave {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_SAVE_DELAY,
            rejected_name: DEFAULT_REJECTED_NAME.to_string(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_rejected_name(mut self, name: impl Into<String>) -> Self {
        self.rejected_name = name.into();
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FakeSave {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveBackend for FakeSave {
    fn save(&self, values: &FieldValues) -> SaveOutcome {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if !values.name.is_empty() && values.name.to_lowercase() == self.rejected_name.to_lowercase() {
            return Err(SaveError::rejected("Server rejected the name value."));
        }

        Ok(SaveReceipt::ok(values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{FakeSave, SaveBackend, SaveError, SaveReceipt};
    use crate::core::{FieldId, FieldValues};
    use std::time::Duration;

    fn instant() -> FakeSave {
        FakeSave::new().with_delay(Duration::ZERO)
    }

    #[test]
    fn default_delay_matches_stub() {
        assert_eq!(FakeSave::new().delay(), Duration::from_millis(1200));
    }

    #[test]
    fn echoes_values_on_success() {
        let values = FieldValues::new().with(FieldId::Name, "Al");
        let receipt = instant().save(&values).expect("save should succeed");
        assert_eq!(receipt, SaveReceipt::ok(values));
        assert_eq!(receipt.status, "ok");
    }

    #[test]
    fn rejects_error_name_case_insensitively() {
        for name in ["error", "ERROR", "ErRoR"] {
            let values = FieldValues::new().with(FieldId::Name, name);
            let err = instant().save(&values).expect_err("should reject");
            assert_eq!(err.reason(), "Server rejected the name value.");
        }
    }

    #[test]
    fn similar_names_are_accepted() {
        for name in ["errors", " error", "terror"] {
            let values = FieldValues::new().with(FieldId::Name, name);
            assert!(instant().save(&values).is_ok(), "name {name:?}");
        }
    }

    #[test]
    fn rejected_name_is_configurable() {
        let backend = instant().with_rejected_name("Mallory");
        let values = FieldValues::new().with(FieldId::Name, "mallory");
        assert!(backend.save(&values).is_err());
    }

    #[test]
    fn empty_reason_falls_back_to_generic_message() {
        assert_eq!(SaveError::rejected("").reason(), "Save failed.");
        assert_eq!(SaveError::rejected("  ").reason(), "Save failed.");
        assert_eq!(SaveError::Unknown.reason(), "Save failed.");
    }

    #[test]
    fn receipt_serializes_like_the_stub_payload() {
        let receipt = SaveReceipt::ok(FieldValues::new().with(FieldId::Email, "a@b.com"));
        let json = serde_json::to_value(&receipt).expect("serialize");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"]["email"], "a@b.com");
    }
}
