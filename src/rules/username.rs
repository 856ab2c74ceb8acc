//! Username rule - checks that the password does not contain the username.

use secrecy::{ExposeSecret, SecretString};

use crate::validation::ValidationResult;

const REASON: &str = "password must not contain the username";

/// Checks that the password does not contain the username or any of its
/// parts, case-insensitively.
///
/// The username is trimmed and lowercased first; if nothing remains the
/// rule does not apply. Otherwise the full username and each fragment
/// obtained by splitting on runs of non-alphanumeric characters are
/// checked for substring containment in the lowercased password.
/// Single-character fragments count as a hit too.
pub fn username_rule(username: &str, password: &SecretString) -> ValidationResult {
    let username = username.trim().to_lowercase();
    if username.is_empty() {
        return ValidationResult::ok();
    }

    let pwd = password.expose_secret().to_lowercase();

    if pwd.contains(&username) {
        return ValidationResult::fail(REASON);
    }

    // "maria.perez" must also block passwords containing just "maria"
    // or "perez", not only the full dotted string.
    for part in username.split(|c: char| !c.is_ascii_alphanumeric()) {
        if !part.is_empty() && pwd.contains(part) {
            return ValidationResult::fail(REASON);
        }
    }

    ValidationResult::ok()
}
