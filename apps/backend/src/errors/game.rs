//! Engine-level error type used across the domain and service layers.
//!
//! Game-rule rejections and infrastructure failures share one type so every
//! operation returns `Result<T, GameError>`, but the two classes are kept
//! distinguishable: rejections carry a stable [`ErrorCode`] and never mutate
//! session state, while infrastructure failures surface to the caller.

use thiserror::Error;

use crate::domain::{Card, Phase, SessionId};
use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("not your turn")]
    NotYourTurn,
    #[error("action not legal in {phase:?} phase")]
    InvalidPhaseForAction { phase: Phase },
    #[error("game already started")]
    GameAlreadyStarted,
    #[error("already drew this turn")]
    AlreadyDrewThisTurn,
    #[error("must draw before discarding")]
    MustDrawFirst,
    #[error("game is full")]
    GameFull,
    #[error("already joined this game")]
    AlreadyJoined,
    #[error("not enough players to start")]
    NotEnoughPlayers,
    #[error("not a member of this game")]
    NotAMember,
    #[error("card {0} not in hand")]
    CardNotInHand(Card),
    #[error("deck is empty")]
    EmptyDeck,
    #[error("no cards available to draw")]
    NoCardsAvailable,
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl GameError {
    /// Stable reason code for the transport boundary.
    pub const fn code(&self) -> ErrorCode {
        match self {
            GameError::NotYourTurn => ErrorCode::NotYourTurn,
            GameError::InvalidPhaseForAction { .. } => ErrorCode::InvalidPhaseForAction,
            GameError::GameAlreadyStarted => ErrorCode::GameAlreadyStarted,
            GameError::AlreadyDrewThisTurn => ErrorCode::AlreadyDrewThisTurn,
            GameError::MustDrawFirst => ErrorCode::MustDrawFirst,
            GameError::GameFull => ErrorCode::GameFull,
            GameError::AlreadyJoined => ErrorCode::AlreadyJoined,
            GameError::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
            GameError::NotAMember => ErrorCode::NotAMember,
            GameError::CardNotInHand(_) => ErrorCode::CardNotInHand,
            GameError::EmptyDeck => ErrorCode::EmptyDeck,
            GameError::NoCardsAvailable => ErrorCode::NoCardsAvailable,
            GameError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            GameError::ParseCard(_) => ErrorCode::ParseCard,
            GameError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            GameError::Storage(_) => ErrorCode::Storage,
        }
    }

    /// True for game-rule rejections: locally recoverable, session unchanged.
    ///
    /// Infrastructure failures (`InvalidConfig`, `Storage`) return false and
    /// propagate as surfaced errors instead of `ActionOutcome::Rejected`.
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, GameError::InvalidConfig(_) | GameError::Storage(_))
    }
}
