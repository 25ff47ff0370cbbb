//! Service layer: session lifecycle, persistence, and fan-out around the
//! pure domain logic.

pub mod directory;
pub mod engine;
pub mod notifier;
pub mod store;

pub use directory::{SessionDirectory, SessionSummary};
pub use engine::GameEngine;
pub use notifier::{NullNotifier, SessionNotifier};
pub use store::{InMemorySessionStore, SessionStore};
