//! Case rule - checks for mixed uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};

use crate::validation::ValidationResult;

/// Checks that the password mixes uppercase and lowercase letters.
///
/// Only the basic Latin ranges `A-Z` and `a-z` count; there is no
/// locale-aware Unicode case folding.
///
/// # Returns
/// - `ValidationResult::fail` if either letter class is absent
/// - `ValidationResult::ok` otherwise
pub fn case_rule(password: &SecretString) -> ValidationResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !has_upper || !has_lower {
        return ValidationResult::fail("password must contain uppercase and lowercase letters");
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_rule_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        let result = case_rule(&pwd);
        assert!(!result.is_valid());
        assert_eq!(
            result.error(),
            Some("password must contain uppercase and lowercase letters")
        );
    }

    #[test]
    fn test_case_rule_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        let result = case_rule(&pwd);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_case_rule_empty_password() {
        let pwd = SecretString::new("".to_string().into());
        let result = case_rule(&pwd);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_case_rule_mixed_case() {
        let pwd = SecretString::new("MixedCase".to_string().into());
        let result = case_rule(&pwd);
        assert_eq!(result, ValidationResult::ok());
    }

    #[test]
    fn test_case_rule_ignores_non_ascii_letters() {
        // Cyrillic uppercase does not satisfy the A-Z requirement
        let pwd = SecretString::new("ПАРОЛЬpass".to_string().into());
        let result = case_rule(&pwd);
        assert!(!result.is_valid());
    }
}
