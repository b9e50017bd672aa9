use std::sync::Arc;

use broadside_domain::Session;

use crate::stores::SessionStore;

/// Use case for browsing public sessions.
///
/// Lists every public session, including full ones; clients decide what is
/// joinable.
pub struct ListPublicSessions {
    sessions: Arc<SessionStore>,
}

impl ListPublicSessions {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self) -> Vec<Session> {
        self.sessions.list_public().await
    }
}
