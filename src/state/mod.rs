pub mod app;
pub mod controller;
pub mod focus;
pub mod form;
pub mod submission;

pub use app::AppState;
pub use controller::FormController;
pub use focus::{FocusState, FocusTarget};
pub use form::{FormEffect, FormEvent, FormState, TouchedFlags, Transition, transition};
pub use submission::{Banner, BannerKind, SubmissionState};
