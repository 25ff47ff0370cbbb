//! Authoritative session state: the aggregate root for one game instance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards_types::Card;
use crate::domain::deck::{Deck, DiscardPile};

/// Opaque player identity supplied by the identity collaborator.
/// Assigned at join time and immutable thereafter.
pub type PlayerId = String;

pub type SessionId = Uuid;

/// Overall session progression phases. `Ended` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Session created, players may join, play has not started.
    Lobby,
    /// Play in progress; draw/discard/declare actions are live.
    InProgress,
    /// A declaration resolved; state is immutable apart from eviction.
    Ended,
}

/// One seated player. The hand is visible only to its owner until the game
/// ends, and even then only as a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub hand: Vec<Card>,
}

/// Outcome of a declaration. `winner_id` is `None` when the declaration
/// failed (declarer tied at or above the minimum score).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub winner_id: Option<PlayerId>,
    pub scores: BTreeMap<PlayerId, u32>,
}

/// Entire game/session container, sufficient for pure domain operations.
///
/// All mutation goes through `domain::actions::apply_action`; services never
/// write fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Join order doubles as turn order.
    pub players: Vec<Player>,
    pub deck: Deck,
    pub discard_pile: DiscardPile,
    /// Index into `players` of whoever acts next. Only meaningful in
    /// `InProgress`.
    pub turn_index: usize,
    pub phase: Phase,
    /// Whether the current player has already drawn this turn.
    pub has_drawn: bool,
    /// Declare window: the player who most recently completed a full
    /// draw+discard turn, cleared as soon as the next player draws.
    pub last_completed_turn: Option<PlayerId>,
    pub result: Option<SessionResult>,
    /// Base seed; deal and reshuffles derive sub-seeds from it.
    pub rng_seed: u64,
    /// Shuffles performed so far (the initial deal counts as one).
    pub shuffle_count: u32,
    /// Bumped on every committed action; lets collaborators detect stale
    /// snapshots.
    pub version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Exposed for the eviction collaborator alongside `phase`.
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
}

impl Session {
    /// Fresh session in `Lobby` phase with the creator seated first.
    pub fn new(
        id: SessionId,
        creator: PlayerId,
        display_name: String,
        rng_seed: u64,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            players: vec![Player {
                id: creator,
                display_name,
                hand: Vec::new(),
            }],
            deck: Deck::reshuffled_with_seed(Vec::new(), rng_seed),
            discard_pile: DiscardPile::new(),
            turn_index: 0,
            phase: Phase::Lobby,
            has_drawn: false,
            last_completed_turn: None,
            result: None,
            rng_seed,
            shuffle_count: 0,
            version: 0,
            created_at: now,
            last_modified: now,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn_index)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.player(id).is_some()
    }

    /// The full card multiset currently in play: deck, every hand, and the
    /// discard pile. After `StartGame` this is always the 52-card set.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.cards().to_vec();
        for player in &self.players {
            cards.extend(player.hand.iter().copied());
        }
        cards.extend(self.discard_pile.cards().iter().copied());
        cards
    }
}

/// Round-robin turn advance over join order.
#[inline]
pub fn next_turn_index(turn_index: usize, player_count: usize) -> usize {
    debug_assert!(player_count > 0);
    (turn_index + 1) % player_count
}
