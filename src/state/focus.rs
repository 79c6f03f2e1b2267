use crate::core::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    SaveButton,
}

impl FocusTarget {
    pub fn field(self) -> Option<FieldId> {
        match self {
            FocusTarget::Field(field) => Some(field),
            FocusTarget::SaveButton => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FocusState {
    targets: Vec<FocusTarget>,
    index: usize,
}

impl FocusState {
    pub fn new() -> Self {
        let mut targets: Vec<FocusTarget> = FieldId::ALL.into_iter().map(FocusTarget::Field).collect();
        targets.push(FocusTarget::SaveButton);
        Self { targets, index: 0 }
    }

    pub fn current(&self) -> FocusTarget {
        self.targets[self.index]
    }

    pub fn current_field(&self) -> Option<FieldId> {
        self.current().field()
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.targets.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.targets.len() - 1) % self.targets.len();
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusState, FocusTarget};
    use crate::core::FieldId;

    #[test]
    fn cycles_through_fields_then_button() {
        let mut focus = FocusState::new();
        assert_eq!(focus.current_field(), Some(FieldId::Name));
        for _ in 0..4 {
            focus.next();
        }
        assert_eq!(focus.current(), FocusTarget::SaveButton);
        focus.next();
        assert_eq!(focus.current_field(), Some(FieldId::Name));
        focus.prev();
        assert_eq!(focus.current(), FocusTarget::SaveButton);
    }
}
