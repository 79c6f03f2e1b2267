pub mod field_input;
pub mod text_edit;

pub use field_input::{FieldInput, KeyResult};
