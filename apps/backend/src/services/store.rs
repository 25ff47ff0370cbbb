//! Session persistence behind a trait so the engine stays storage-agnostic.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{Session, SessionId};
use crate::errors::GameError;

/// Durable record of session state, written after every committed action.
///
/// Implementations must be atomic per session: a failed `save` leaves the
/// previously stored state intact, and the engine keeps serving the old
/// in-memory state in that case.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: &Session) -> Result<(), GameError>;
    async fn load(&self, id: SessionId) -> Result<Option<Session>, GameError>;
    async fn remove(&self, id: SessionId) -> Result<(), GameError>;
}

/// Process-local store used in tests and single-node deployments.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), GameError> {
        self.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn load(&self, id: SessionId) -> Result<Option<Session>, GameError> {
        Ok(self.sessions.get(&id).map(|s| s.clone()))
    }

    async fn remove(&self, id: SessionId) -> Result<(), GameError> {
        self.sessions.remove(&id);
        Ok(())
    }
}
