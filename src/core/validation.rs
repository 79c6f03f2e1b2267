use crate::core::validators::{
    Validator, contains_digit, digits_only, length_between, matches, min_length, non_empty,
    required, run_validators, trimmed_min_length,
};
use crate::core::{FieldId, FieldValues};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Field -> message for every field that currently fails. Valid fields have no entry.
pub type FieldErrors = IndexMap<FieldId, String>;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

struct FieldRules {
    rules: [Vec<Validator>; 4],
}

impl FieldRules {
    fn build() -> Self {
        let email = Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex");
        Self {
            rules: [
                vec![
                    required("Name is required."),
                    trimmed_min_length(2, "Name must be at least 2 characters."),
                ],
                vec![
                    non_empty("Password is required."),
                    min_length(6, "Password must be at least 6 characters."),
                    contains_digit("Password must include at least one digit."),
                ],
                vec![
                    non_empty("Email is required."),
                    matches(email, "Email looks invalid."),
                ],
                vec![
                    non_empty("Phone is required."),
                    digits_only("Phone must contain digits only."),
                    length_between(10, 15, "Phone must be between 10 and 15 digits."),
                ],
            ],
        }
    }

    fn for_field(&self, field: FieldId) -> &[Validator] {
        &self.rules[field.index()]
    }
}

static RULES: LazyLock<FieldRules> = LazyLock::new(FieldRules::build);

pub fn validate_field(field: FieldId, value: &str) -> Result<(), String> {
    run_validators(RULES.for_field(field), value)
}

pub fn validate(values: &FieldValues) -> FieldErrors {
    FieldId::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, values.get(field))
                .err()
                .map(|err| (field, err))
        })
        .collect()
}
