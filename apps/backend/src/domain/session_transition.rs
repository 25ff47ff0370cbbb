//! Edge-triggered lifecycle transitions derived from before/after state.
//!
//! The engine diffs the committed session against its predecessor and hands
//! the resulting transitions to the notifier (and the logs), so observers
//! get events without the transition function having to report them.

use crate::domain::state::{Phase, PlayerId, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Explicit: a player took a seat in the lobby.
    PlayerJoined { player_id: PlayerId },

    /// Edge-triggered: session moved from Lobby to InProgress.
    GameStarted,

    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: session moved to Ended.
    GameEnded { winner_id: Option<PlayerId> },
}

/// Derive transitions from before/after session state.
pub fn derive_session_transitions(before: &Session, after: &Session) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    // 1. New players (join order is append-only)
    for player in after.players.iter().skip(before.players.len()) {
        transitions.push(SessionTransition::PlayerJoined {
            player_id: player.id.clone(),
        });
    }

    // 2. Game start (Lobby -> InProgress)
    if before.phase == Phase::Lobby && after.phase == Phase::InProgress {
        transitions.push(SessionTransition::GameStarted);
    }

    // 3. Turn change, only while the game is live
    if after.phase == Phase::InProgress {
        let turn_changed = before.phase != Phase::InProgress || before.turn_index != after.turn_index;
        if turn_changed {
            if let Some(current) = after.current_player() {
                transitions.push(SessionTransition::TurnBecame {
                    player_id: current.id.clone(),
                });
            }
        }
    }

    // 4. Game end (!Ended -> Ended)
    if before.phase != Phase::Ended && after.phase == Phase::Ended {
        let winner_id = after.result.as_ref().and_then(|r| r.winner_id.clone());
        transitions.push(SessionTransition::GameEnded { winner_id });
    }

    transitions
}
