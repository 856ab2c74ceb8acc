//! Denylist management module
//!
//! Handles loading common-password lists for the common-words rule.
//! Lists are plain values handed to [`validate`](crate::validate), never
//! global state, so callers and tests can supply arbitrary ones.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Bundled starter list for callers that do not ship their own file.
pub const DEFAULT_COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "qwerty", "abc123", "football", "monkey", "letmein",
    "dragon", "111111", "baseball", "iloveyou", "master", "sunshine", "welcome", "shadow",
    "superman", "michael", "ninja", "mustang", "admin",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `PWD_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn denylist_path() -> PathBuf {
    std::env::var("PWD_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Returns the bundled default list as an owned denylist.
pub fn default_denylist() -> Vec<String> {
    DEFAULT_COMMON_PASSWORDS
        .iter()
        .map(|entry| entry.to_string())
        .collect()
}

/// Loads the common-password denylist from the configured file.
///
/// # Environment Variable
///
/// Set `PWD_DENYLIST_PATH` to specify a custom denylist file location.
/// If not set, defaults to `./assets/denylist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn load_denylist() -> Result<Vec<String>, DenylistError> {
    load_denylist_from_path(denylist_path())
}

/// Loads a common-password denylist from a specific file path.
///
/// One entry per line; entries are trimmed and lowercased, empty lines
/// skipped. File order is preserved since the common-words rule checks
/// substring containment entry by entry, not set membership.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn load_denylist_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DenylistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist load FAILED: Empty file {:?}", path);
        return Err(DenylistError::EmptyFile);
    }

    let entries: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist loaded: {} entries from {:?}", entries.len(), path);

    Ok(entries)
}
