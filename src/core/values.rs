use crate::core::FieldId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldValues {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phone: String,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Password => &self.password,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields holding a non-empty value, in declaration order.
    pub fn filled(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Password => &mut self.password,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValues;
    use crate::core::FieldId;

    #[test]
    fn set_only_touches_target_field() {
        let mut values = FieldValues::new();
        values.set(FieldId::Email, "a@b.com");

        assert_eq!(values.get(FieldId::Email), "a@b.com");
        assert_eq!(values.get(FieldId::Name), "");
        assert_eq!(values.get(FieldId::Password), "");
        assert_eq!(values.get(FieldId::Phone), "");
    }

    #[test]
    fn serializes_with_field_names() {
        let values = FieldValues::new()
            .with(FieldId::Name, "Al")
            .with(FieldId::Phone, "1234567890");
        let json = serde_json::to_value(&values).expect("serialize");

        assert_eq!(json["name"], "Al");
        assert_eq!(json["password"], "");
        assert_eq!(json["phone"], "1234567890");
    }

    #[test]
    fn missing_keys_deserialize_as_empty() {
        let values: FieldValues = serde_yaml::from_str("name: Kasia\n").expect("yaml");
        assert_eq!(values.name, "Kasia");
        assert!(values.email.is_empty());
        assert_eq!(values.filled().count(), 1);
    }
}
