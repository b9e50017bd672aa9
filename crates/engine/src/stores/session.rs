//! Session registry - the in-memory home of every live lobby session.
//!
//! One registry-wide lock guards the session map and its indexes. Every
//! mutation (create, join, evict) holds the write lock across its whole
//! read-check-mutate sequence, so two joins can never both observe a free
//! seat in the same session.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use broadside_domain::{
    InviteCode, Participant, ParticipantId, PlayerName, Session, SessionId, Visibility,
};

use super::ids::{IdGenerator, TokenSpaceExhausted};
use crate::infrastructure::ports::RandomPort;

/// How a join request picks its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinTarget {
    /// A specific session, public or private.
    Session(SessionId),
    /// The private session holding this invite code.
    InviteCode(InviteCode),
    /// The oldest public session still waiting for an opponent.
    Matchmaking,
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LobbyError {
    #[error("Game not found")]
    NotFound,
    #[error("No available public games")]
    NoAvailableSession,
    #[error("Game is full")]
    SessionFull,
    #[error(transparent)]
    TokenSpaceExhausted(#[from] TokenSpaceExhausted),
}

#[derive(Default)]
struct Registry {
    sessions: HashMap<SessionId, Session>,
    /// Session ids in insertion order; listing and matchmaking walk this.
    order: Vec<SessionId>,
    invite_codes: HashMap<InviteCode, SessionId>,
    participant_ids: HashSet<ParticipantId>,
}

impl Registry {
    fn insert(&mut self, session: Session) {
        let id = session.id().clone();
        if let Some(code) = session.invite_code() {
            self.invite_codes.insert(code.clone(), id.clone());
        }
        self.participant_ids
            .extend(session.participant_ids().cloned());
        self.order.push(id.clone());
        self.sessions.insert(id, session);
    }

    fn resolve(&self, target: &JoinTarget) -> Result<SessionId, LobbyError> {
        match target {
            JoinTarget::Session(id) if self.sessions.contains_key(id) => Ok(id.clone()),
            JoinTarget::Session(_) => Err(LobbyError::NotFound),
            JoinTarget::InviteCode(code) => {
                self.invite_codes.get(code).cloned().ok_or(LobbyError::NotFound)
            }
            JoinTarget::Matchmaking => self
                .order
                .iter()
                .find(|id| {
                    self.sessions
                        .get(*id)
                        .is_some_and(Session::is_open_for_matchmaking)
                })
                .cloned()
                .ok_or(LobbyError::NoAvailableSession),
        }
    }

    fn remove(&mut self, id: &SessionId) -> Option<Session> {
        let session = self.sessions.remove(id)?;
        if let Some(code) = session.invite_code() {
            self.invite_codes.remove(code);
        }
        for participant_id in session.participant_ids() {
            self.participant_ids.remove(participant_id);
        }
        Some(session)
    }
}

/// Owns all live sessions. Shared with request handlers through `App`.
pub struct SessionStore {
    registry: RwLock<Registry>,
    ids: IdGenerator,
}

impl SessionStore {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            ids: IdGenerator::new(random),
        }
    }

    /// Create a waiting session seated with its host.
    ///
    /// Private sessions get a fresh invite code. Fails only when no unique
    /// token could be drawn, in which case nothing is inserted.
    pub async fn create(
        &self,
        host_name: PlayerName,
        is_private: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Session, LobbyError> {
        let mut guard = self.registry.write().await;
        let registry = &mut *guard;

        let host_id = self
            .ids
            .participant_id(|id| registry.participant_ids.contains(id))?;
        let session_id = self
            .ids
            .session_id(|id| registry.sessions.contains_key(id))?;
        let visibility = if is_private {
            Visibility::Private {
                invite_code: self
                    .ids
                    .invite_code(|code| registry.invite_codes.contains_key(code))?,
            }
        } else {
            Visibility::Public
        };

        let session = Session::new(
            session_id,
            Participant::new(host_id, host_name),
            visibility,
            created_at,
        );
        registry.insert(session.clone());

        tracing::info!(
            session_id = %session.id(),
            host_id = %session.host().id(),
            is_private,
            "Session created"
        );
        Ok(session)
    }

    /// Seat a player in the session picked by `target`.
    ///
    /// Resolution, the capacity check, and the append happen under one write
    /// lock.
    pub async fn join(
        &self,
        player_name: PlayerName,
        target: JoinTarget,
    ) -> Result<Session, LobbyError> {
        let mut guard = self.registry.write().await;
        let registry = &mut *guard;

        let session_id = registry.resolve(&target)?;
        if registry
            .sessions
            .get(&session_id)
            .map_or(true, Session::is_full)
        {
            return Err(LobbyError::SessionFull);
        }

        let participant_id = self
            .ids
            .participant_id(|id| registry.participant_ids.contains(id))?;
        let session = registry
            .sessions
            .get_mut(&session_id)
            .ok_or(LobbyError::NotFound)?;
        // add_participant only fails on capacity, checked above under the same lock
        session
            .add_participant(Participant::new(participant_id.clone(), player_name))
            .map_err(|_| LobbyError::SessionFull)?;
        let joined = session.clone();
        registry.participant_ids.insert(participant_id.clone());

        tracing::info!(
            session_id = %joined.id(),
            participant_id = %participant_id,
            players = joined.participant_count(),
            "Player joined session"
        );
        Ok(joined)
    }

    /// Every public session in insertion order, full ones included.
    pub async fn list_public(&self) -> Vec<Session> {
        let registry = self.registry.read().await;
        registry
            .order
            .iter()
            .filter_map(|id| registry.sessions.get(id))
            .filter(|session| !session.is_private())
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &SessionId) -> Option<Session> {
        self.registry.read().await.sessions.get(id).cloned()
    }

    /// Remove every session created before `cutoff`, releasing its ids and
    /// invite code. Returns the removed sessions' ids.
    pub async fn evict_created_before(&self, cutoff: DateTime<Utc>) -> Vec<SessionId> {
        let mut guard = self.registry.write().await;
        let registry = &mut *guard;

        let stale: Vec<SessionId> = registry
            .order
            .iter()
            .filter(|id| {
                registry
                    .sessions
                    .get(*id)
                    .is_some_and(|session| session.created_at() < cutoff)
            })
            .cloned()
            .collect();
        if stale.is_empty() {
            return stale;
        }

        for id in &stale {
            registry.remove(id);
        }
        let sessions = &registry.sessions;
        registry.order.retain(|id| sessions.contains_key(id));
        stale
    }

    pub async fn len(&self) -> usize {
        self.registry.read().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.sessions.is_empty()
    }
}
