use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Fails on empty or whitespace-only values.
pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Fails only on the empty string; whitespace counts as content.
pub fn non_empty(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn trimmed_min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let inner = min_length(min_len, message);
    Box::new(move |value: &str| inner(value.trim()))
}

pub fn length_between(min_len: usize, max_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        let len = value.chars().count();
        if len < min_len || len > max_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn contains_digit(message: impl Into<String>) -> Validator {
    custom(|value| value.chars().any(|c| c.is_ascii_digit()), message)
}

pub fn digits_only(message: impl Into<String>) -> Validator {
    custom(|value| value.chars().all(|c| c.is_ascii_digit()), message)
}

pub fn matches(re: Regex, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(move |value: &str| {
        if f(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failing_validator_wins() {
        let validators = vec![
            non_empty("empty"),
            min_length(3, "short"),
            contains_digit("no digit"),
        ];

        assert_eq!(run_validators(&validators, ""), Err("empty".to_string()));
        assert_eq!(run_validators(&validators, "ab"), Err("short".to_string()));
        assert_eq!(run_validators(&validators, "abc"), Err("no digit".to_string()));
        assert_eq!(run_validators(&validators, "ab1"), Ok(()));
    }

    #[test]
    fn required_trims_but_non_empty_does_not() {
        assert!(required("r")("   ").is_err());
        assert!(non_empty("r")("   ").is_ok());
    }

    #[test]
    fn trimmed_min_length_ignores_surrounding_whitespace() {
        let v = trimmed_min_length(2, "short");
        assert!(v("  a  ").is_err());
        assert!(v(" ab ").is_ok());
    }

    #[test]
    fn digit_checks_are_ascii_only() {
        // Arabic-Indic digits are Unicode digits but not 0-9.
        assert!(digits_only("d")("١٢٣").is_err());
        assert!(contains_digit("d")("abc٣").is_err());
        assert!(digits_only("d")("0123456789").is_ok());
    }

    #[test]
    fn length_between_is_inclusive() {
        let v = length_between(10, 15, "len");
        assert!(v(&"1".repeat(9)).is_err());
        assert!(v(&"1".repeat(10)).is_ok());
        assert!(v(&"1".repeat(15)).is_ok());
        assert!(v(&"1".repeat(16)).is_err());
    }
}
