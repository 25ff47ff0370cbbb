//! Fan-out hook for committed state changes.
//!
//! The engine calls the notifier after every commit with the broadcast-safe
//! snapshot and the transitions derived from the before/after pair. Transport
//! adapters (websocket hubs, webhooks) implement this to push updates;
//! notification is fire-and-forget and never affects commit outcome.

use async_trait::async_trait;

use crate::domain::{SessionSnapshot, SessionTransition};

#[async_trait]
pub trait SessionNotifier: Send + Sync {
    async fn notify(&self, snapshot: &SessionSnapshot, transitions: &[SessionTransition]);
}

/// No-op notifier for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullNotifier;

#[async_trait]
impl SessionNotifier for NullNotifier {
    async fn notify(&self, _snapshot: &SessionSnapshot, _transitions: &[SessionTransition]) {}
}
