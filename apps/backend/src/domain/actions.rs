//! Player actions and the validate-then-apply transition function.
//!
//! `apply_action` is pure: it takes the current session plus one intended
//! action and returns either a fully updated session or a rejection. It
//! never partially applies: validation failures leave the input untouched,
//! so callers can commit the returned value atomically.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::GameConfig;
use crate::domain::cards_types::Card;
use crate::domain::deck::Deck;
use crate::domain::scoring::score_hand;
use crate::domain::seed_derivation::{derive_deal_seed, derive_reshuffle_seed};
use crate::domain::state::{next_turn_index, Phase, Player, Session, SessionResult};
use crate::errors::GameError;

/// An intended action, tagged with the acting identity by the transport
/// envelope. Payload shapes mirror the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Take a seat in a lobby-phase session.
    Join { display_name: String },
    /// Deal hands and begin play.
    StartGame,
    /// Draw the top card of the deck (reshuffling the discard pile below its
    /// top card if the deck is exhausted).
    DrawFromDeck,
    /// Draw the top card of the discard pile.
    DrawFromDiscard,
    /// Discard one card and pass the turn.
    Discard { card: Card },
    /// Claim the lowest hand; ends the game either way.
    Declare,
}

/// Validate `action` against `session` and produce the successor state.
///
/// On success the returned session has `version` bumped and `last_modified`
/// set to `now`. On rejection the error carries the reason code and the
/// caller keeps the original state.
pub fn apply_action(
    session: &Session,
    actor: &str,
    action: &Action,
    config: &GameConfig,
    now: OffsetDateTime,
) -> Result<Session, GameError> {
    let mut next = session.clone();
    match action {
        Action::Join { display_name } => join(&mut next, actor, display_name, config)?,
        Action::StartGame => start_game(&mut next, actor, config)?,
        Action::DrawFromDeck => draw_from_deck(&mut next, actor)?,
        Action::DrawFromDiscard => draw_from_discard(&mut next, actor)?,
        Action::Discard { card } => discard(&mut next, actor, *card)?,
        Action::Declare => declare(&mut next, actor)?,
    }
    next.version += 1;
    next.last_modified = now;
    Ok(next)
}

fn join(
    session: &mut Session,
    actor: &str,
    display_name: &str,
    config: &GameConfig,
) -> Result<(), GameError> {
    if session.phase != Phase::Lobby {
        return Err(GameError::GameAlreadyStarted);
    }
    if session.is_member(actor) {
        return Err(GameError::AlreadyJoined);
    }
    if session.players.len() >= config.max_players {
        return Err(GameError::GameFull);
    }
    session.players.push(Player {
        id: actor.to_string(),
        display_name: display_name.to_string(),
        hand: Vec::new(),
    });
    Ok(())
}

fn start_game(session: &mut Session, actor: &str, config: &GameConfig) -> Result<(), GameError> {
    match session.phase {
        Phase::Lobby => {}
        Phase::InProgress => return Err(GameError::GameAlreadyStarted),
        Phase::Ended => {
            return Err(GameError::InvalidPhaseForAction {
                phase: session.phase,
            })
        }
    }
    if !session.is_member(actor) {
        return Err(GameError::NotAMember);
    }
    if session.players.len() < config.min_players {
        return Err(GameError::NotEnoughPlayers);
    }
    if session.players.len() * config.initial_hand_size > 52 {
        return Err(GameError::NoCardsAvailable);
    }

    let mut deck = Deck::shuffled_with_seed(derive_deal_seed(session.rng_seed));
    for player in &mut session.players {
        let mut hand = deck.deal(config.initial_hand_size)?;
        hand.sort();
        player.hand = hand;
    }
    session.deck = deck;
    session.shuffle_count = 1;
    session.turn_index = 0;
    session.has_drawn = false;
    session.last_completed_turn = None;
    session.phase = Phase::InProgress;
    Ok(())
}

/// Phase and turn-ownership checks shared by draw and discard actions.
fn require_in_progress_turn(session: &Session, actor: &str) -> Result<(), GameError> {
    if session.phase != Phase::InProgress {
        return Err(GameError::InvalidPhaseForAction {
            phase: session.phase,
        });
    }
    match session.current_player() {
        Some(current) if current.id == actor => Ok(()),
        _ => Err(GameError::NotYourTurn),
    }
}

fn draw_from_deck(session: &mut Session, actor: &str) -> Result<(), GameError> {
    require_in_progress_turn(session, actor)?;
    if session.has_drawn {
        return Err(GameError::AlreadyDrewThisTurn);
    }
    let card = match session.deck.draw() {
        Ok(card) => card,
        Err(GameError::EmptyDeck) => {
            // Reshuffle-on-empty: everything below the discard top becomes a
            // new deck. If that set is empty too, the draw is unservable.
            let below_top = session.discard_pile.take_below_top();
            if below_top.is_empty() {
                return Err(GameError::NoCardsAvailable);
            }
            let seed = derive_reshuffle_seed(session.rng_seed, session.shuffle_count);
            session.shuffle_count += 1;
            session.deck = Deck::reshuffled_with_seed(below_top, seed);
            session.deck.draw()?
        }
        Err(other) => return Err(other),
    };
    finish_draw(session, actor, card)
}

fn draw_from_discard(session: &mut Session, actor: &str) -> Result<(), GameError> {
    require_in_progress_turn(session, actor)?;
    if session.has_drawn {
        return Err(GameError::AlreadyDrewThisTurn);
    }
    let card = session
        .discard_pile
        .take_top()
        .ok_or(GameError::NoCardsAvailable)?;
    finish_draw(session, actor, card)
}

fn finish_draw(session: &mut Session, actor: &str, card: Card) -> Result<(), GameError> {
    let player = session
        .player_mut(actor)
        .ok_or(GameError::NotYourTurn)?;
    player.hand.push(card);
    session.has_drawn = true;
    // A new draw closes the previous player's declare window.
    session.last_completed_turn = None;
    Ok(())
}

fn discard(session: &mut Session, actor: &str, card: Card) -> Result<(), GameError> {
    require_in_progress_turn(session, actor)?;
    if !session.has_drawn {
        return Err(GameError::MustDrawFirst);
    }
    let player = session
        .player_mut(actor)
        .ok_or(GameError::NotYourTurn)?;
    let pos = player
        .hand
        .iter()
        .position(|c| *c == card)
        .ok_or(GameError::CardNotInHand(card))?;
    player.hand.remove(pos);
    session.discard_pile.push(card);
    session.turn_index = next_turn_index(session.turn_index, session.players.len());
    session.has_drawn = false;
    session.last_completed_turn = Some(actor.to_string());
    Ok(())
}

fn declare(session: &mut Session, actor: &str) -> Result<(), GameError> {
    if session.phase != Phase::InProgress {
        return Err(GameError::InvalidPhaseForAction {
            phase: session.phase,
        });
    }
    // Declaring is legal only for the player who just completed a full
    // draw+discard turn, and only until the next player draws.
    if session.last_completed_turn.as_deref() != Some(actor) {
        return Err(GameError::NotYourTurn);
    }

    // Score every hand server-side; client-reported scores are never trusted.
    let scores: std::collections::BTreeMap<_, _> = session
        .players
        .iter()
        .map(|p| (p.id.clone(), score_hand(&p.hand)))
        .collect();
    let declarer_score = scores[actor];
    let minimum = scores.values().copied().min().unwrap_or(0);
    let tied_at_minimum = scores
        .iter()
        .filter(|(id, &s)| s == minimum && id.as_str() != actor)
        .count();

    // Strict rule: the declarer wins only with the unique minimum; any tie
    // defeats the declaration.
    let winner_id = if declarer_score == minimum && tied_at_minimum == 0 {
        Some(actor.to_string())
    } else {
        None
    };

    session.result = Some(SessionResult { winner_id, scores });
    session.phase = Phase::Ended;
    session.has_drawn = false;
    session.last_completed_turn = None;
    Ok(())
}
