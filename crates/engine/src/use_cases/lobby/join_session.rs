use std::sync::Arc;

use broadside_domain::common::non_blank;
use broadside_domain::{InviteCode, Session, SessionId};

use super::USERNAME_FIELD;
use crate::stores::{JoinTarget, LobbyError, SessionStore};
use crate::use_cases::validation::{require_player_name, ValidationError};

/// Raw join request as it arrives from a client.
#[derive(Debug, Clone, Default)]
pub struct JoinSessionInput {
    pub player_name: String,
    pub session_id: Option<String>,
    pub invite_code: Option<String>,
}

/// Use case for joining a session by id, by invite code, or by matchmaking.
pub struct JoinSession {
    sessions: Arc<SessionStore>,
}

impl JoinSession {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, input: JoinSessionInput) -> Result<Session, JoinSessionError> {
        let player_name = require_player_name(&input.player_name, USERNAME_FIELD)?;
        let target = Self::target(&input)?;

        match self.sessions.join(player_name, target.clone()).await {
            Ok(session) => Ok(session),
            Err(e) => {
                tracing::debug!(join_target = ?target, error = %e, "Join rejected");
                Err(e.into())
            }
        }
    }

    /// An explicit session id wins over an invite code; with neither the
    /// player is matched into an open public session.
    fn target(input: &JoinSessionInput) -> Result<JoinTarget, JoinSessionError> {
        if let Some(id) = non_blank(input.session_id.as_deref()) {
            return Ok(JoinTarget::Session(SessionId::new(id)));
        }
        if let Some(code) = non_blank(input.invite_code.as_deref()) {
            // A malformed code cannot belong to any session
            let code = InviteCode::parse(code).map_err(|_| JoinSessionError::NotFound)?;
            return Ok(JoinTarget::InviteCode(code));
        }
        Ok(JoinTarget::Matchmaking)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinSessionError {
    #[error("Username is required")]
    MissingName,
    #[error("{0}")]
    InvalidName(String),
    #[error("Game not found")]
    NotFound,
    #[error("No available public games")]
    NoAvailableSession,
    #[error("Game is full")]
    SessionFull,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for JoinSessionError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::Required { .. } => Self::MissingName,
            ValidationError::Invalid { reason, .. } => Self::InvalidName(reason),
        }
    }
}

impl From<LobbyError> for JoinSessionError {
    fn from(e: LobbyError) -> Self {
        match e {
            LobbyError::NotFound => Self::NotFound,
            LobbyError::NoAvailableSession => Self::NoAvailableSession,
            LobbyError::SessionFull => Self::SessionFull,
            LobbyError::TokenSpaceExhausted(inner) => Self::Internal(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::ScriptedRandom;
    use broadside_domain::PlayerName;
    use chrono::Utc;

    fn store() -> Arc<SessionStore> {
        Arc::new(SessionStore::new(Arc::new(ScriptedRandom::new())))
    }

    async fn host(sessions: &SessionStore, name: &str, is_private: bool) -> Session {
        sessions
            .create(PlayerName::new(name).unwrap(), is_private, Utc::now())
            .await
            .unwrap()
    }

    fn input(name: &str) -> JoinSessionInput {
        JoinSessionInput {
            player_name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn join_by_id_then_full() {
        let sessions = store();
        let session = host(&sessions, "alice", false).await;
        let use_case = JoinSession::new(sessions);

        let joined = use_case
            .execute(JoinSessionInput {
                session_id: Some(session.id().to_string()),
                ..input("bob")
            })
            .await
            .unwrap();
        assert_eq!(joined.participant_count(), 2);
        let guest = joined.participants().nth(1).unwrap();
        assert_eq!(guest.name().as_str(), "bob");
        assert!(!guest.is_ready());

        let err = use_case
            .execute(JoinSessionInput {
                session_id: Some(session.id().to_string()),
                ..input("carol")
            })
            .await
            .unwrap_err();
        assert_eq!(err, JoinSessionError::SessionFull);
    }

    #[tokio::test]
    async fn missing_name_is_rejected_first() {
        let use_case = JoinSession::new(store());
        let err = use_case
            .execute(JoinSessionInput {
                session_id: Some("whatever".to_string()),
                ..input("")
            })
            .await
            .unwrap_err();
        assert_eq!(err, JoinSessionError::MissingName);
        assert_eq!(err.to_string(), "Username is required");
    }

    #[tokio::test]
    async fn blank_session_id_falls_back_to_matchmaking() {
        let sessions = store();
        let open = host(&sessions, "alice", false).await;
        let use_case = JoinSession::new(sessions);

        let joined = use_case
            .execute(JoinSessionInput {
                session_id: Some("  ".to_string()),
                ..input("bob")
            })
            .await
            .unwrap();
        assert_eq!(joined.id(), open.id());
    }

    #[tokio::test]
    async fn matchmaking_with_only_private_or_full_sessions() {
        let sessions = store();
        host(&sessions, "alice", true).await;
        let full = host(&sessions, "dave", false).await;
        let use_case = JoinSession::new(sessions);
        use_case
            .execute(JoinSessionInput {
                session_id: Some(full.id().to_string()),
                ..input("erin")
            })
            .await
            .unwrap();

        let err = use_case.execute(input("carol")).await.unwrap_err();
        assert_eq!(err, JoinSessionError::NoAvailableSession);
        assert_eq!(err.to_string(), "No available public games");
    }

    #[tokio::test]
    async fn invite_code_is_case_insensitive() {
        let sessions = Arc::new(SessionStore::new(Arc::new(ScriptedRandom::with_script([
            "hostid000001",
            "gameid000001",
            "QX7KDA",
        ]))));
        let private = host(&sessions, "alice", true).await;
        assert_eq!(private.invite_code().unwrap().as_str(), "QX7KDA");
        let code = " qx7kda ".to_string();
        let use_case = JoinSession::new(sessions);

        let joined = use_case
            .execute(JoinSessionInput {
                invite_code: Some(code),
                ..input("bob")
            })
            .await
            .unwrap();
        assert_eq!(joined.id(), private.id());
    }

    #[tokio::test]
    async fn session_id_takes_precedence_over_invite_code() {
        let sessions = store();
        let public = host(&sessions, "alice", false).await;
        let private = host(&sessions, "dave", true).await;
        let use_case = JoinSession::new(sessions);

        let joined = use_case
            .execute(JoinSessionInput {
                session_id: Some(public.id().to_string()),
                invite_code: private.invite_code().map(ToString::to_string),
                ..input("bob")
            })
            .await
            .unwrap();
        assert_eq!(joined.id(), public.id());
    }

    #[tokio::test]
    async fn malformed_or_unknown_invite_code_is_not_found() {
        let sessions = store();
        host(&sessions, "alice", true).await;
        let use_case = JoinSession::new(sessions);

        for code in ["nope", "ZZZZZZ"] {
            let err = use_case
                .execute(JoinSessionInput {
                    invite_code: Some(code.to_string()),
                    ..input("bob")
                })
                .await
                .unwrap_err();
            assert_eq!(err, JoinSessionError::NotFound);
        }
    }

    #[test]
    fn token_exhaustion_maps_to_internal() {
        let err: JoinSessionError = LobbyError::TokenSpaceExhausted(
            crate::stores::TokenSpaceExhausted {
                kind: crate::stores::TokenKind::ParticipantId,
                attempts: 16,
            },
        )
        .into();
        assert!(matches!(err, JoinSessionError::Internal(_)));
    }
}
