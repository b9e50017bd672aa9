//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{ClockPort, RandomPort},
};
use crate::stores::SessionStore;
use crate::use_cases;

/// Main application state.
///
/// Owns the session registry and the use cases built on it.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub sessions: Arc<SessionStore>,
    pub use_cases: UseCases,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub lobby: use_cases::LobbyUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// `session_ttl = None` disables eviction of stale sessions.
    pub fn new(
        session_ttl: Option<chrono::Duration>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let sessions = Arc::new(SessionStore::new(random));

        let lobby = use_cases::LobbyUseCases::new(
            Arc::new(use_cases::lobby::CreateSession::new(
                sessions.clone(),
                clock.clone(),
            )),
            Arc::new(use_cases::lobby::JoinSession::new(sessions.clone())),
            Arc::new(use_cases::lobby::ListPublicSessions::new(sessions.clone())),
            Arc::new(use_cases::lobby::EvictStaleSessions::new(
                sessions.clone(),
                clock.clone(),
                session_ttl,
            )),
        );

        Self {
            sessions,
            use_cases: UseCases { lobby },
            clock,
        }
    }

    /// App backed by the real clock and thread-local randomness.
    pub fn with_system_ports(session_ttl: Option<chrono::Duration>) -> Self {
        Self::new(
            session_ttl,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }
}
