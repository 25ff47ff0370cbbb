//! Error codes for the Least Count backend.
//!
//! This module defines all rejection reason codes used throughout the engine.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear at the transport boundary.

use core::fmt;

/// Centralized reason codes for the Least Count engine.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in `ActionOutcome::Rejected` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn and phase validation
    /// Action submitted by a player other than the one expected to act
    NotYourTurn,
    /// Action is not legal in the session's current phase
    InvalidPhaseForAction,
    /// Join attempted after the game left the lobby
    GameAlreadyStarted,
    /// Player drew a second card before discarding
    AlreadyDrewThisTurn,
    /// Discard attempted before drawing this turn
    MustDrawFirst,

    // Lobby validation
    /// Configured maximum player count reached
    GameFull,
    /// Player id is already a member of the session
    AlreadyJoined,
    /// Fewer than the configured minimum players present
    NotEnoughPlayers,
    /// Actor is not a member of the session
    NotAMember,

    // Card validation
    /// Card is not present in the acting player's hand
    CardNotInHand,
    /// Draw requested from an empty deck
    EmptyDeck,
    /// No cards available from any source for this draw
    NoCardsAvailable,
    /// Card token failed to parse
    ParseCard,

    // Resource lookup
    /// Session id is not present in the directory
    SessionNotFound,

    // System errors
    /// Invalid engine configuration
    InvalidConfig,
    /// Persistence collaborator failure
    Storage,
}

impl ErrorCode {
    /// Canonical string form of this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotYourTurn => "NOT_YOUR_TURN",
            ErrorCode::InvalidPhaseForAction => "INVALID_PHASE_FOR_ACTION",
            ErrorCode::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            ErrorCode::AlreadyDrewThisTurn => "ALREADY_DREW_THIS_TURN",
            ErrorCode::MustDrawFirst => "MUST_DRAW_FIRST",
            ErrorCode::GameFull => "GAME_FULL",
            ErrorCode::AlreadyJoined => "ALREADY_JOINED",
            ErrorCode::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            ErrorCode::NotAMember => "NOT_A_MEMBER",
            ErrorCode::CardNotInHand => "CARD_NOT_IN_HAND",
            ErrorCode::EmptyDeck => "EMPTY_DECK",
            ErrorCode::NoCardsAvailable => "NO_CARDS_AVAILABLE",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::Storage => "STORAGE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
