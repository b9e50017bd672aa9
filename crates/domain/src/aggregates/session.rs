//! Session aggregate - a single game lobby from creation until play starts
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the participant list can only grow through
//!   [`Session::add_participant`], which enforces capacity
//! - **Host by construction**: the host is a separate field, so a session can
//!   never be empty and the host is always listed first
//! - **Visibility carries the invite code**: a private session always has a
//!   code and a public one never does

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Participant;
use crate::error::DomainError;
use crate::ids::{ParticipantId, SessionId};
use crate::value_objects::InviteCode;

/// Maximum number of participants (host included) in a session.
pub const SESSION_CAPACITY: usize = 2;

/// Lifecycle status of a session.
///
/// The lobby only ever creates `Waiting` sessions; the other states belong to
/// the game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Waiting,
    InProgress,
    Finished,
}

/// Who can find a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Listed publicly and eligible for matchmaking.
    Public,
    /// Hidden from listings; reachable by id or invite code.
    Private { invite_code: InviteCode },
}

/// A game lobby.
///
/// # Invariants
///
/// - `1 <= participant_count() <= SESSION_CAPACITY`
/// - the host is always the first participant
/// - `is_private()` iff `invite_code()` is `Some`, and the code never changes
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    host: Participant,
    guests: Vec<Participant>,
    visibility: Visibility,
    status: SessionStatus,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a waiting session seated with its host.
    pub fn new(
        id: SessionId,
        host: Participant,
        visibility: Visibility,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            host,
            guests: Vec::with_capacity(SESSION_CAPACITY - 1),
            visibility,
            status: SessionStatus::Waiting,
            created_at,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[inline]
    pub fn host(&self) -> &Participant {
        &self.host
    }

    /// All participants, host first, in join order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        std::iter::once(&self.host).chain(self.guests.iter())
    }

    /// Ids of every seated participant.
    pub fn participant_ids(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants().map(Participant::id)
    }

    #[inline]
    pub fn participant_count(&self) -> usize {
        1 + self.guests.len()
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        matches!(self.visibility, Visibility::Private { .. })
    }

    pub fn invite_code(&self) -> Option<&InviteCode> {
        match &self.visibility {
            Visibility::Public => None,
            Visibility::Private { invite_code } => Some(invite_code),
        }
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    #[inline]
    pub fn is_full(&self) -> bool {
        self.participant_count() >= SESSION_CAPACITY
    }

    /// Whether matchmaking may place an unspecified join here.
    pub fn is_open_for_matchmaking(&self) -> bool {
        !self.is_private() && self.status == SessionStatus::Waiting && !self.is_full()
    }

    /// Seat a guest at the end of the participant list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionFull` when the session is at capacity; the
    /// session is left untouched.
    pub fn add_participant(&mut self, participant: Participant) -> Result<(), DomainError> {
        if self.is_full() {
            return Err(DomainError::session_full(
                self.participant_count(),
                SESSION_CAPACITY,
            ));
        }
        self.guests.push(participant);
        Ok(())
    }
}
