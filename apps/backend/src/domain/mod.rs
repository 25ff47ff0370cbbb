//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod scoring;
pub mod seed_derivation;
pub mod session_transition;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_actions;

// Re-exports for ergonomics
pub use actions::{apply_action, Action};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deck::{full_deck, Deck, DiscardPile};
pub use scoring::{card_points, score_hand};
pub use session_transition::{derive_session_transitions, SessionTransition};
pub use snapshot::{player_view, snapshot, PlayerPublic, PlayerView, SessionSnapshot};
pub use state::{next_turn_index, Phase, Player, PlayerId, Session, SessionId, SessionResult};
