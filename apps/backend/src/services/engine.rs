//! Orchestration around the pure transition function.
//!
//! One submission runs as: look up the session, take its lock, validate and
//! apply, persist the successor, commit it in memory, then notify. The store
//! write happens before the in-memory commit so a storage failure leaves both
//! the live state and the stored state on the previous version.

use std::sync::Arc;

use rand::TryRngCore;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::{
    apply_action, derive_session_transitions, player_view, snapshot, PlayerId, PlayerView,
    Session, SessionId, SessionSnapshot,
};
use crate::errors::GameError;
use crate::protocol::{ActionEnvelope, ActionOutcome};
use crate::services::directory::{SessionDirectory, SessionSummary};
use crate::services::notifier::SessionNotifier;
use crate::services::store::SessionStore;

pub struct GameEngine {
    directory: SessionDirectory,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn SessionNotifier>,
    config: GameConfig,
}

impl GameEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn SessionNotifier>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            directory: SessionDirectory::new(),
            store,
            notifier,
            config,
        })
    }

    /// Open a new lobby with the creator seated, seeded from OS entropy.
    pub async fn create_session(
        &self,
        creator: PlayerId,
        display_name: String,
    ) -> Result<PlayerView, GameError> {
        let seed = rand::rngs::OsRng
            .try_next_u64()
            .map_err(|e| GameError::Storage(format!("entropy source unavailable: {e}")))?;
        self.create_session_with_seed(creator, display_name, seed)
            .await
    }

    /// Deterministic variant; the seed fixes the deal and every reshuffle.
    pub async fn create_session_with_seed(
        &self,
        creator: PlayerId,
        display_name: String,
        seed: u64,
    ) -> Result<PlayerView, GameError> {
        let session = Session::new(
            Uuid::new_v4(),
            creator.clone(),
            display_name,
            seed,
            OffsetDateTime::now_utc(),
        );
        let id = session.id;
        self.store.save(&session).await?;
        let entry = self.directory.insert(session);
        let guard = entry.lock().await;
        info!(session_id = %id, creator = %creator, "session created");
        player_view(&guard, &creator)
    }

    /// Apply one submitted action to its session.
    ///
    /// Rule violations come back as `ActionOutcome::Rejected` with the state
    /// untouched; only infrastructure failures surface as `Err`.
    pub async fn submit(&self, envelope: &ActionEnvelope) -> Result<ActionOutcome, GameError> {
        let entry = self.directory.get(envelope.session_id)?;
        let mut guard = entry.lock().await;

        let now = OffsetDateTime::now_utc();
        match apply_action(&guard, &envelope.actor_id, &envelope.action, &self.config, now) {
            Ok(next) => {
                if let Err(err) = self.store.save(&next).await {
                    warn!(
                        session_id = %envelope.session_id,
                        actor = %envelope.actor_id,
                        error = %err,
                        "persist failed, commit aborted"
                    );
                    return Err(err);
                }
                let transitions = derive_session_transitions(&guard, &next);
                *guard = next;
                let snap = snapshot(&guard);
                let view = player_view(&guard, &envelope.actor_id)?;
                drop(guard);

                info!(
                    session_id = %envelope.session_id,
                    actor = %envelope.actor_id,
                    action = ?envelope.action,
                    version = snap.version,
                    "action committed"
                );
                self.notifier.notify(&snap, &transitions).await;
                Ok(ActionOutcome::Ok { view })
            }
            Err(err) if err.is_rejection() => {
                debug!(
                    session_id = %envelope.session_id,
                    actor = %envelope.actor_id,
                    action = ?envelope.action,
                    reason = %err.code(),
                    "action rejected"
                );
                Ok(ActionOutcome::rejected(&err))
            }
            Err(err) => Err(err),
        }
    }

    /// Broadcast-safe snapshot of one session.
    pub async fn get_snapshot(&self, id: SessionId) -> Result<SessionSnapshot, GameError> {
        let entry = self.directory.get(id)?;
        let guard = entry.lock().await;
        Ok(snapshot(&guard))
    }

    /// A member's view of one session, own hand included.
    pub async fn get_player_view(
        &self,
        id: SessionId,
        viewer: &str,
    ) -> Result<PlayerView, GameError> {
        let entry = self.directory.get(id)?;
        let guard = entry.lock().await;
        player_view(&guard, viewer)
    }

    pub async fn list_open_sessions(&self) -> Vec<SessionSummary> {
        self.directory.list_open_sessions().await
    }

    /// Evict expired `Ended` sessions and drop their stored records.
    pub async fn sweep_ended(&self, now: OffsetDateTime) -> Result<usize, GameError> {
        let evicted = self
            .directory
            .sweep_ended(now, self.config.ended_retention)
            .await;
        for id in &evicted {
            self.store.remove(*id).await?;
            info!(session_id = %id, "ended session evicted");
        }
        Ok(evicted.len())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
