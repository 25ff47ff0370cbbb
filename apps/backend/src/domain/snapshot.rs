//! Public snapshot API for observing session state without leaking hands.
//!
//! `SessionSnapshot` is safe to broadcast to every participant: other
//! players' hands appear only as sizes, and scores appear only once the
//! session has ended. `PlayerView` adds the viewer's own hand on top.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::cards_types::Card;
use crate::domain::state::{Phase, PlayerId, Session, SessionId, SessionResult};
use crate::errors::GameError;

/// Public info about a single seated player: hand size, never contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub display_name: String,
    pub hand_size: usize,
}

/// Broadcast-safe view of one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub phase: Phase,
    /// Join order = turn order.
    pub players: Vec<PlayerPublic>,
    /// Id of the player expected to act; `None` outside `InProgress`.
    pub turn: Option<PlayerId>,
    pub deck_size: usize,
    /// The discard pile is face-up; top = last element.
    pub discard_pile: Vec<Card>,
    /// Present once `phase == Ended`; reveals scores, never raw hands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SessionResult>,
    pub version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
}

/// A participant's view: the public snapshot plus their own hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub session: SessionSnapshot,
    pub hand: Vec<Card>,
}

/// Produce the broadcast-safe snapshot of the current session state.
pub fn snapshot(session: &Session) -> SessionSnapshot {
    let turn = if session.phase == Phase::InProgress {
        session.current_player().map(|p| p.id.clone())
    } else {
        None
    };
    SessionSnapshot {
        id: session.id,
        phase: session.phase,
        players: session
            .players
            .iter()
            .map(|p| PlayerPublic {
                id: p.id.clone(),
                display_name: p.display_name.clone(),
                hand_size: p.hand.len(),
            })
            .collect(),
        turn,
        deck_size: session.deck.len(),
        discard_pile: session.discard_pile.cards().to_vec(),
        result: session.result.clone(),
        version: session.version,
        last_modified: session.last_modified,
    }
}

/// Snapshot plus the viewer's own hand. Fails for non-members so hand
/// contents can never be requested for someone else's seat.
pub fn player_view(session: &Session, viewer: &str) -> Result<PlayerView, GameError> {
    let player = session.player(viewer).ok_or(GameError::NotAMember)?;
    Ok(PlayerView {
        session: snapshot(session),
        hand: player.hand.clone(),
    })
}
