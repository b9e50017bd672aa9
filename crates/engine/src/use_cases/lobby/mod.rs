//! Lobby use cases.
//!
//! Creating sessions, joining them, listing public ones, and evicting stale
//! ones.

use std::sync::Arc;

mod create_session;
mod evict_stale_sessions;
mod join_session;
mod list_public_sessions;

pub use create_session::{CreateSession, CreateSessionError};
pub use evict_stale_sessions::EvictStaleSessions;
pub use join_session::{JoinSession, JoinSessionError, JoinSessionInput};
pub use list_public_sessions::ListPublicSessions;

/// Field name used in player-facing validation messages.
pub(crate) const USERNAME_FIELD: &str = "Username";

/// Container for lobby use cases.
pub struct LobbyUseCases {
    pub create: Arc<CreateSession>,
    pub join: Arc<JoinSession>,
    pub list_public: Arc<ListPublicSessions>,
    pub evict_stale: Arc<EvictStaleSessions>,
}

impl LobbyUseCases {
    pub fn new(
        create: Arc<CreateSession>,
        join: Arc<JoinSession>,
        list_public: Arc<ListPublicSessions>,
        evict_stale: Arc<EvictStaleSessions>,
    ) -> Self {
        Self {
            create,
            join,
            list_public,
            evict_stale,
        }
    }
}
