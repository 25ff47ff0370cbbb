//! Least Count hand scoring: lower is better.
//!
//! Ace counts 1, face cards count 10, numeric ranks count their face value.
//! Declaration resolution (who wins on a declare) lives in
//! `domain::actions`; this module only prices cards and hands.

use crate::domain::cards_types::{Card, Rank};

/// Point value of a single card.
pub const fn card_points(card: Card) -> u32 {
    match card.rank {
        Rank::Ace => 1,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Total score of a hand. Pure; order of cards is irrelevant.
pub fn score_hand(hand: &[Card]) -> u32 {
    hand.iter().map(|&c| card_points(c)).sum()
}
