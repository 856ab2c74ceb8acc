//! Common-words rule - checks the password against a denylist.

use secrecy::{ExposeSecret, SecretString};

use crate::validation::ValidationResult;

/// Checks that the password does not contain any entry of the
/// common-password list, case-insensitively.
///
/// Entries are checked in list order; empty entries are skipped. The
/// check is substring containment, so `"qwerty123!"` is rejected by an
/// entry `"qwerty"`.
pub fn common_words_rule(password: &SecretString, common_passwords: &[String]) -> ValidationResult {
    let pwd = password.expose_secret().to_lowercase();

    for entry in common_passwords {
        let entry = entry.to_lowercase();
        if entry.is_empty() {
            continue;
        }
        if pwd.contains(&entry) {
            return ValidationResult::fail("password must not contain common words or passwords");
        }
    }

    ValidationResult::ok()
}
