use std::sync::Arc;

use broadside_domain::Session;

use super::USERNAME_FIELD;
use crate::infrastructure::ports::ClockPort;
use crate::stores::{LobbyError, SessionStore};
use crate::use_cases::validation::{require_player_name, ValidationError};

/// Use case for hosting a new session.
pub struct CreateSession {
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
}

impl CreateSession {
    pub fn new(sessions: Arc<SessionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { sessions, clock }
    }

    pub async fn execute(
        &self,
        host_name: &str,
        is_private: bool,
    ) -> Result<Session, CreateSessionError> {
        let host_name = require_player_name(host_name, USERNAME_FIELD)?;
        let session = self
            .sessions
            .create(host_name, is_private, self.clock.now())
            .await?;
        Ok(session)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateSessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Registry error: {0}")]
    Registry(#[from] LobbyError),
}
