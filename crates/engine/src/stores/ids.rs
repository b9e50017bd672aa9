//! Identifier and invite code generation.
//!
//! Tokens come from the injected [`RandomPort`] and are checked against the
//! caller's view of the live key space. A taken token is redrawn, up to
//! [`MAX_TOKEN_ATTEMPTS`] times.

use std::fmt;
use std::sync::Arc;

use broadside_domain::{
    InviteCode, ParticipantId, SessionId, ID_ALPHABET, ID_LENGTH, INVITE_CODE_ALPHABET,
    INVITE_CODE_LENGTH,
};

use crate::infrastructure::ports::RandomPort;

/// Draws allowed per identifier before giving up.
pub const MAX_TOKEN_ATTEMPTS: usize = 16;

/// Which key space a token was drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    SessionId,
    ParticipantId,
    InviteCode,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::SessionId => write!(f, "session id"),
            TokenKind::ParticipantId => write!(f, "participant id"),
            TokenKind::InviteCode => write!(f, "invite code"),
        }
    }
}

/// Every draw collided with a live key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not generate a unique {kind} after {attempts} attempts")]
pub struct TokenSpaceExhausted {
    pub kind: TokenKind,
    pub attempts: usize,
}

/// Generates unique session ids, participant ids, and invite codes.
pub struct IdGenerator {
    random: Arc<dyn RandomPort>,
}

impl IdGenerator {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn session_id(
        &self,
        taken: impl Fn(&SessionId) -> bool,
    ) -> Result<SessionId, TokenSpaceExhausted> {
        self.unique(
            TokenKind::SessionId,
            || Some(SessionId::new(self.random.gen_token(ID_ALPHABET, ID_LENGTH))),
            taken,
        )
    }

    pub fn participant_id(
        &self,
        taken: impl Fn(&ParticipantId) -> bool,
    ) -> Result<ParticipantId, TokenSpaceExhausted> {
        self.unique(
            TokenKind::ParticipantId,
            || Some(ParticipantId::new(self.random.gen_token(ID_ALPHABET, ID_LENGTH))),
            taken,
        )
    }

    pub fn invite_code(
        &self,
        taken: impl Fn(&InviteCode) -> bool,
    ) -> Result<InviteCode, TokenSpaceExhausted> {
        self.unique(
            TokenKind::InviteCode,
            || {
                let token = self
                    .random
                    .gen_token(INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH);
                InviteCode::parse(&token).ok()
            },
            taken,
        )
    }

    fn unique<T: fmt::Display>(
        &self,
        kind: TokenKind,
        draw: impl Fn() -> Option<T>,
        taken: impl Fn(&T) -> bool,
    ) -> Result<T, TokenSpaceExhausted> {
        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            match draw() {
                Some(candidate) if !taken(&candidate) => return Ok(candidate),
                Some(candidate) => {
                    tracing::debug!(kind = %kind, attempt, token = %candidate, "Token collision, redrawing");
                }
                None => {
                    tracing::warn!(kind = %kind, attempt, "Random source produced a malformed token");
                }
            }
        }
        Err(TokenSpaceExhausted {
            kind,
            attempts: MAX_TOKEN_ATTEMPTS,
        })
    }
}
