//! In-memory registry of live sessions.
//!
//! Each session sits behind its own `tokio::sync::Mutex`, which is what
//! serializes concurrent submissions per session; the surrounding map only
//! guards membership. Lock acquisition always happens after the map lookup
//! completes, never while holding a map shard.

use std::sync::Arc;

use dashmap::DashMap;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;

use serde::Serialize;

use crate::domain::{Phase, Session, SessionId};
use crate::errors::GameError;

/// Listing row for the session browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub phase: Phase,
    pub player_count: usize,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
}

impl SessionSummary {
    fn of(session: &Session) -> Self {
        Self {
            id: session.id,
            phase: session.phase,
            player_count: session.players.len(),
            last_modified: session.last_modified,
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionDirectory {
    sessions: DashMap<SessionId, Arc<Mutex<Session>>>,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: Session) -> Arc<Mutex<Session>> {
        let id = session.id;
        let entry = Arc::new(Mutex::new(session));
        self.sessions.insert(id, Arc::clone(&entry));
        entry
    }

    pub fn get(&self, id: SessionId) -> Result<Arc<Mutex<Session>>, GameError> {
        self.sessions
            .get(&id)
            .map(|e| Arc::clone(e.value()))
            .ok_or(GameError::SessionNotFound(id))
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions still accepting players, most recently touched first.
    pub async fn list_open_sessions(&self) -> Vec<SessionSummary> {
        let mut open = Vec::new();
        for entry in self.snapshot_entries() {
            let session = entry.lock().await;
            if session.phase == Phase::Lobby {
                open.push(SessionSummary::of(&session));
            }
        }
        open.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        open
    }

    /// Evict `Ended` sessions whose last activity is older than `retention`.
    /// Returns the evicted ids so the caller can clear their stored records.
    pub async fn sweep_ended(
        &self,
        now: OffsetDateTime,
        retention: Duration,
    ) -> Vec<SessionId> {
        let mut expired = Vec::new();
        for entry in self.snapshot_entries() {
            let session = entry.lock().await;
            if session.phase == Phase::Ended && now - session.last_modified >= retention {
                expired.push(session.id);
            }
        }
        for id in &expired {
            self.sessions.remove(id);
        }
        expired
    }

    /// Clone out the current entries so iteration never holds a map shard
    /// across an `.await`.
    fn snapshot_entries(&self) -> Vec<Arc<Mutex<Session>>> {
        self.sessions
            .iter()
            .map(|e| Arc::clone(e.value()))
            .collect()
    }
}
