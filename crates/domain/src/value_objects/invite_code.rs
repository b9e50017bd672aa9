//! Invite codes gating entry to private sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Characters an invite code is drawn from (uppercase alphanumeric).
pub const INVITE_CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every invite code.
pub const INVITE_CODE_LENGTH: usize = 6;

/// A short, human-typeable code (6 uppercase alphanumerics).
///
/// Parsing is lenient about how a player typed the code: surrounding
/// whitespace is dropped and letters are uppercased before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InviteCode(String);

impl InviteCode {
    /// Parse and normalize an invite code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` if the normalized code is not exactly
    /// six characters from [`INVITE_CODE_ALPHABET`].
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim().to_ascii_uppercase();
        if code.len() != INVITE_CODE_LENGTH {
            return Err(DomainError::parse(format!(
                "Invite code must be {} characters",
                INVITE_CODE_LENGTH
            )));
        }
        if !code.bytes().all(|b| INVITE_CODE_ALPHABET.contains(&b)) {
            return Err(DomainError::parse(
                "Invite code may only contain letters and digits",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for InviteCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<InviteCode> for String {
    fn from(code: InviteCode) -> String {
        code.0
    }
}
