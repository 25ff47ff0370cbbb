//! Wire types for submitting actions and reporting outcomes.
//!
//! The envelope carries the authenticated actor alongside the action so the
//! engine never trusts a player id embedded in the action payload itself.

use serde::{Deserialize, Serialize};

use crate::domain::{Action, PlayerId, PlayerView, SessionId};
use crate::errors::GameError;

/// One submitted action, addressed to a session on behalf of an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    pub session_id: SessionId,
    /// Identity of the submitting player, established by the transport.
    pub actor_id: PlayerId,
    pub action: Action,
}

/// Result of one submission, shaped for the transport boundary.
///
/// `Rejected` covers game-rule violations only; infrastructure failures
/// surface as `Err(GameError)` from the engine instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Action committed; the actor's refreshed view of the session.
    Ok { view: PlayerView },
    /// Action refused; session state is unchanged.
    Rejected {
        /// Stable machine-readable code, e.g. `NOT_YOUR_TURN`.
        reason: String,
        message: String,
    },
}

impl ActionOutcome {
    pub fn rejected(err: &GameError) -> Self {
        ActionOutcome::Rejected {
            reason: err.code().as_str().to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ActionOutcome::Ok { .. })
    }
}
