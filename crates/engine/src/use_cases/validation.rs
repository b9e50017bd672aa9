//! Common validation helpers for use cases.

use broadside_domain::{DomainError, PlayerName};

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Required { field_name: &'static str },

    #[error("{reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

/// Validate and build a player name.
pub fn require_player_name(
    value: &str,
    field_name: &'static str,
) -> Result<PlayerName, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field_name });
    }
    PlayerName::new(value).map_err(|e| ValidationError::Invalid {
        field_name,
        reason: match e {
            DomainError::Validation(msg) => msg,
            other => other.to_string(),
        },
    })
}
