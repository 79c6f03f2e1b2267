use crate::task::SaveRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartSave(SaveRequest),
    RequestRender,
}
