//! Password policy rules
//!
//! Each rule checks one aspect of the password and returns a
//! [`ValidationResult`](crate::ValidationResult). Rules are pure: no state,
//! no side effects, re-evaluated on every call.

mod case;
mod common;
mod digit;
mod length;
mod special;
mod username;

pub use case::case_rule;
pub use common::common_words_rule;
pub use digit::digit_rule;
pub use length::min_length_rule;
pub use special::special_char_rule;
pub use username::username_rule;
