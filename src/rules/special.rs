//! Special-character rule - checks for at least one symbol from a fixed set.

use secrecy::{ExposeSecret, SecretString};

use crate::validation::ValidationResult;

/// The accepted special characters. Fixed set, matched literally.
const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', ';',
    '\'', ':', '"', '\\', '|', ',', '.', '<', '>', '/', '?', '`', '~',
];

/// Checks that the password contains at least one character from
/// [`SPECIAL_CHARS`].
pub fn special_char_rule(password: &SecretString) -> ValidationResult {
    let has_special = password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(&c));

    if !has_special {
        return ValidationResult::fail("password must contain special characters");
    }
    ValidationResult::ok()
}
