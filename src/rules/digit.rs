//! Digit rule - checks for at least one number.

use secrecy::{ExposeSecret, SecretString};

use crate::validation::ValidationResult;

/// Checks that the password contains at least one digit `0-9`.
pub fn digit_rule(password: &SecretString) -> ValidationResult {
    let has_digit = password.expose_secret().chars().any(|c| c.is_ascii_digit());

    if !has_digit {
        return ValidationResult::fail("password must contain numbers");
    }
    ValidationResult::ok()
}
