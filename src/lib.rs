//! Password policy validation library
//!
//! This library validates passwords against a fixed set of composable
//! policy rules and reports the first violated rule with a human-readable
//! message, with configurable denylist support.
//!
//! Rules run in a fixed order and the pipeline short-circuits on the
//! first failure: mixed case, digits, special characters, minimum
//! length, username containment, common-password containment.
//!
//! # Features
//!
//! - `async` (default): Enables async result delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to denylist file
//!   (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{default_denylist, validate};
//! use secrecy::SecretString;
//!
//! let denylist = default_denylist();
//!
//! let password = SecretString::new("MyP@ssw0rd1".to_string().into());
//! let result = validate("maria", &password, &denylist);
//! assert!(result.is_valid());
//!
//! let password = SecretString::new("Maria123!x".to_string().into());
//! let result = validate("maria", &password, &denylist);
//! assert_eq!(result.error(), Some("password must not contain the username"));
//! ```

// Internal modules
mod denylist;
mod pipeline;
mod rules;
mod validation;

// Public API
pub use denylist::{
    default_denylist, denylist_path, load_denylist, load_denylist_from_path, DenylistError,
    DEFAULT_COMMON_PASSWORDS,
};
pub use pipeline::validate;
pub use rules::{
    case_rule, common_words_rule, digit_rule, min_length_rule, special_char_rule, username_rule,
};
pub use validation::ValidationResult;

#[cfg(feature = "async")]
pub use pipeline::validate_tx;
