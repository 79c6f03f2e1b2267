pub mod validation;
pub mod validators;
pub mod values;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use validation::{FieldErrors, validate};
pub use values::FieldValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Password,
    Email,
    Phone,
}

impl FieldId {
    /// Declaration order, which is also render and focus order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Password,
        FieldId::Email,
        FieldId::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Password => "password",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::FieldId;
    use crate::error::Error;

    #[test]
    fn parses_lowercase_names() {
        for field in FieldId::ALL {
            let parsed: FieldId = field.as_str().parse().expect("field should parse");
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Phone".parse::<FieldId>().expect_err("case matters");
        assert!(matches!(err, Error::UnknownField(name) if name == "Phone"));
    }

    #[test]
    fn index_follows_declaration_order() {
        let indexes: Vec<usize> = FieldId::ALL.iter().map(|f| f.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }
}
