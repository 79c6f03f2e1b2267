pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod state;
pub mod task;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use core::{FieldErrors, FieldId, FieldValues, validate};
pub use error::{Error, Result};
pub use state::{FormController, SubmissionState};
pub use task::{FakeSave, SaveBackend, SaveExecutor};
