//! Deck and discard pile with deterministic, injectable shuffling.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::errors::GameError;

/// Generate the full 52-card set in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Ordered draw pile. The top card (next to draw) is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in a uniformly random permutation from the given source.
    /// Always succeeds.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Seeded convenience constructor; same seed, same permutation.
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Reshuffle an arbitrary card set (the reshuffle-on-empty policy) into a
    /// new draw pile.
    pub fn reshuffled_with_seed(mut cards: Vec<Card>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Draw the top card. Callers handle `EmptyDeck` by falling back to the
    /// reshuffle-on-empty policy.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Draw `n` cards for an initial hand.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if self.cards.len() < n {
            return Err(GameError::NoCardsAvailable);
        }
        Ok(self.cards.split_off(self.cards.len() - n))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Discard stack; top = most recently discarded. Only the top is drawable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return everything except the current top card, for
    /// recycling into a fresh deck when the draw pile runs out.
    pub fn take_below_top(&mut self) -> Vec<Card> {
        match self.cards.pop() {
            Some(top) => std::mem::replace(&mut self.cards, vec![top]),
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
