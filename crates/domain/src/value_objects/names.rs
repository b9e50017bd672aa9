//! Validated name newtypes for lobby participants
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a player's display name
const MAX_PLAYER_NAME_LENGTH: usize = 50;

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Username is required"));
        }
        if trimmed.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Username cannot exceed {} characters",
                MAX_PLAYER_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = PlayerName::new("  alice ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(PlayerName::new("").is_err());
        assert_eq!(
            PlayerName::new("   ").unwrap_err(),
            DomainError::validation("Username is required")
        );
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "x".repeat(MAX_PLAYER_NAME_LENGTH + 1);
        assert!(PlayerName::new(long).is_err());

        let max = "x".repeat(MAX_PLAYER_NAME_LENGTH);
        assert!(PlayerName::new(max).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<PlayerName, _> = serde_json::from_str("\"bob\"");
        assert_eq!(ok.unwrap().as_str(), "bob");

        let err: Result<PlayerName, _> = serde_json::from_str("\"  \"");
        assert!(err.is_err());
    }
}
