//! Server-authoritative engine for the Least Count card game.
//!
//! The domain layer holds pure state and rules; the service layer adds
//! per-session locking, persistence, and change notification on top. Clients
//! submit intents through [`protocol::ActionEnvelope`] and observe state only
//! through hand-hiding snapshots.

#![deny(clippy::wildcard_imports)]

pub mod config;
pub mod domain;
pub mod errors;
pub mod protocol;
pub mod services;
pub mod test_bootstrap;

pub use config::GameConfig;
pub use errors::{ErrorCode, GameError};
pub use protocol::{ActionEnvelope, ActionOutcome};
pub use services::{GameEngine, InMemorySessionStore, NullNotifier};
