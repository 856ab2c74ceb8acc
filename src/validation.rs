//! Validation result type shared by every rule and the pipeline.

/// Outcome of a policy rule or of a full validation run.
///
/// The fields are private so the invariant holds by construction:
/// a failing result always carries a reason, a passing result never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    error: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failing result with the given reason.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }

    /// Returns `true` if the password passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The violation message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Consumes the result and returns the violation message, if any.
    pub fn into_error(self) -> Option<String> {
        self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_no_error() {
        let result = ValidationResult::ok();
        assert!(result.is_valid());
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_fail_carries_reason() {
        let result = ValidationResult::fail("too weak");
        assert!(!result.is_valid());
        assert_eq!(result.error(), Some("too weak"));
        assert_eq!(result.into_error(), Some("too weak".to_string()));
    }

    #[test]
    fn test_results_compare_by_value() {
        assert_eq!(ValidationResult::ok(), ValidationResult::ok());
        assert_eq!(
            ValidationResult::fail("reason"),
            ValidationResult::fail("reason")
        );
        assert_ne!(ValidationResult::ok(), ValidationResult::fail("reason"));
    }
}
