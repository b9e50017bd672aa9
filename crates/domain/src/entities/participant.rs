//! Participant entity - a player attached to a lobby session

use crate::ids::ParticipantId;
use crate::value_objects::PlayerName;

/// A player seated in a session, either the host or a guest.
///
/// Participants start not ready. Nothing in the lobby flips the flag; it is
/// kept for the game phase that follows matchmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    name: PlayerName,
    ready: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, name: PlayerName) -> Self {
        Self {
            id,
            name,
            ready: false,
        }
    }

    #[inline]
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}
