//! Policy pipeline - runs the rules in fixed order and reports the first
//! violation.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::rules::{
    case_rule, common_words_rule, digit_rule, min_length_rule, special_char_rule, username_rule,
};
use crate::validation::ValidationResult;

/// Validates a password against the full policy.
///
/// Rules run in a fixed order and the first failure is returned as-is;
/// later rules are never evaluated once one has failed:
///
/// 1. mixed case
/// 2. digits
/// 3. special characters
/// 4. minimum length
/// 5. username containment
/// 6. common-password containment
///
/// # Arguments
/// * `username` - may be empty; only used by the username rule
/// * `password` - the candidate password
/// * `common_passwords` - denylist entries, checked in order
pub fn validate(
    username: &str,
    password: &SecretString,
    common_passwords: &[String],
) -> ValidationResult {
    let rules: [Box<dyn Fn() -> ValidationResult + '_>; 6] = [
        Box::new(|| case_rule(password)),
        Box::new(|| digit_rule(password)),
        Box::new(|| special_char_rule(password)),
        Box::new(|| min_length_rule(password)),
        Box::new(|| username_rule(username, password)),
        Box::new(|| common_words_rule(password, common_passwords)),
    ];

    for rule in &rules {
        let result = rule();
        if !result.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected: {}", result.error().unwrap_or_default());
            return result;
        }
    }

    ValidationResult::ok()
}

/// Async version that sends the validation result via channel.
///
/// The pipeline itself stays synchronous; this wrapper only delivers the
/// result to a receiver, e.g. a UI task.
#[cfg(feature = "async")]
pub async fn validate_tx(
    username: &str,
    password: &SecretString,
    common_passwords: &[String],
    tx: mpsc::Sender<ValidationResult>,
) {
    let result = validate(username, password, common_passwords);

    if tx.send(result).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("validation receiver dropped before the result was sent");
    }
}
