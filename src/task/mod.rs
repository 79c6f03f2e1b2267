pub mod executor;
pub mod save;

pub use executor::SaveExecutor;
pub use save::{
    FakeSave, SaveBackend, SaveCompletion, SaveError, SaveOutcome, SaveReceipt, SaveRequest,
    SaveTicket,
};
