//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use crate::validation::ValidationResult;

const MIN_LENGTH: usize = 8;

/// Checks that the password is at least [`MIN_LENGTH`] characters long.
///
/// Length is counted in characters, the same unit every other rule scans.
pub fn min_length_rule(password: &SecretString) -> ValidationResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return ValidationResult::fail(format!(
            "password must be at least {} characters long",
            MIN_LENGTH
        ));
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = min_length_rule(&pwd);
        assert_eq!(
            result,
            ValidationResult::fail("password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        let result = min_length_rule(&pwd);
        assert_eq!(result, ValidationResult::ok());
    }

    #[test]
    fn test_length_rule_valid() {
        let pwd = SecretString::new("LongEnough123!".to_string().into());
        let result = min_length_rule(&pwd);
        assert_eq!(result, ValidationResult::ok());
    }

    #[test]
    fn test_length_rule_counts_characters_not_bytes() {
        // 8 characters, more than 8 bytes
        let pwd = SecretString::new("áéíóúÁÉ1".to_string().into());
        let result = min_length_rule(&pwd);
        assert_eq!(result, ValidationResult::ok());
    }
}
