//! Scenario tests for lobby and turn actions.

use crate::config::GameConfig;
use crate::domain::actions::{apply_action, Action};
use crate::domain::deck::{Deck, DiscardPile};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{apply_ok, lobby, now, started};
use crate::errors::GameError;

fn join_as(n: usize) -> Action {
    Action::Join {
        display_name: format!("Player {n}"),
    }
}

#[test]
fn join_rejected_after_start() {
    let session = started(2, 1);
    let err = apply_action(&session, "p3", &join_as(3), &GameConfig::default(), now())
        .unwrap_err();
    assert_eq!(err, GameError::GameAlreadyStarted);
}

#[test]
fn join_rejected_for_existing_member() {
    let session = lobby(2, 1);
    let err = apply_action(&session, "p2", &join_as(2), &GameConfig::default(), now())
        .unwrap_err();
    assert_eq!(err, GameError::AlreadyJoined);
}

#[test]
fn join_rejected_when_full() {
    let session = lobby(6, 1);
    let err = apply_action(&session, "p7", &join_as(7), &GameConfig::default(), now())
        .unwrap_err();
    assert_eq!(err, GameError::GameFull);
}

#[test]
fn join_appends_in_turn_order() {
    let session = lobby(4, 1);
    let ids: Vec<&str> = session.players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
    assert!(session.players.iter().all(|p| p.hand.is_empty()));
}

#[test]
fn start_requires_two_players() {
    let session = lobby(1, 1);
    let err = apply_action(
        &session,
        "p1",
        &Action::StartGame,
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::NotEnoughPlayers);
}

#[test]
fn start_requires_membership() {
    let session = lobby(3, 1);
    let err = apply_action(
        &session,
        "stranger",
        &Action::StartGame,
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::NotAMember);
}

#[test]
fn start_deals_hands_and_opens_play() {
    let session = started(3, 42);
    assert_eq!(session.phase, Phase::InProgress);
    assert_eq!(session.turn_index, 0);
    assert!(!session.has_drawn);
    for p in &session.players {
        assert_eq!(p.hand.len(), 7);
    }
    assert_eq!(session.deck.len(), 52 - 3 * 7);
    assert!(session.discard_pile.is_empty());
}

#[test]
fn start_is_deterministic_per_seed() {
    let a = started(2, 42);
    let b = started(2, 42);
    assert_eq!(a.players[0].hand, b.players[0].hand);
    assert_eq!(a.deck, b.deck);
    let c = started(2, 43);
    assert_ne!(a.players[0].hand, c.players[0].hand);
}

#[test]
fn start_twice_is_rejected() {
    let session = started(2, 1);
    let err = apply_action(
        &session,
        "p1",
        &Action::StartGame,
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::GameAlreadyStarted);
}

#[test]
fn draw_by_wrong_player_leaves_session_unchanged() {
    let session = started(3, 7);
    let before = session.clone();
    for action in [Action::DrawFromDeck, Action::DrawFromDiscard] {
        let err =
            apply_action(&session, "p2", &action, &GameConfig::default(), now()).unwrap_err();
        assert_eq!(err, GameError::NotYourTurn);
    }
    // Rejections must not mutate any field, the session id included.
    assert_eq!(session, before);
}

#[test]
fn draw_by_non_member_is_not_your_turn() {
    let session = started(2, 7);
    let err = apply_action(
        &session,
        "stranger",
        &Action::DrawFromDeck,
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::NotYourTurn);
}

#[test]
fn second_draw_in_one_turn_is_rejected() {
    let session = started(2, 7);
    let session = apply_ok(&session, "p1", Action::DrawFromDeck);
    for action in [Action::DrawFromDeck, Action::DrawFromDiscard] {
        let err =
            apply_action(&session, "p1", &action, &GameConfig::default(), now()).unwrap_err();
        assert_eq!(err, GameError::AlreadyDrewThisTurn);
    }
}

#[test]
fn discard_before_draw_is_rejected() {
    let session = started(2, 7);
    let card = session.players[0].hand[0];
    let err = apply_action(
        &session,
        "p1",
        &Action::Discard { card },
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::MustDrawFirst);
}

#[test]
fn discard_requires_card_in_hand() {
    let session = started(2, 7);
    let session = apply_ok(&session, "p1", Action::DrawFromDeck);
    // p2's first card cannot be in p1's hand: hands are disjoint.
    let foreign = session.players[1].hand[0];
    let err = apply_action(
        &session,
        "p1",
        &Action::Discard { card: foreign },
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::CardNotInHand(foreign));
}

#[test]
fn draw_then_discard_same_card_restores_sizes() {
    let before = started(2, 7);
    let drawn = apply_ok(&before, "p1", Action::DrawFromDeck);
    let card = *drawn.players[0].hand.last().unwrap();
    let after = apply_ok(&drawn, "p1", Action::Discard { card });

    assert_eq!(
        after.players[0].hand.len(),
        before.players[0].hand.len()
    );
    assert_eq!(after.deck.len(), before.deck.len() - 1);
    assert_eq!(after.discard_pile.top(), Some(card));
    assert_eq!(after.discard_pile.len(), before.discard_pile.len() + 1);
}

#[test]
fn discard_advances_turn_round_robin() {
    let mut session = started(3, 7);
    for (step, expected) in ["p1", "p2", "p3", "p1", "p2"].iter().enumerate() {
        assert_eq!(session.turn_index, step % 3, "step {step}");
        assert_eq!(session.current_player().unwrap().id, *expected);
        session = apply_ok(&session, expected, Action::DrawFromDeck);
        let card = *session.player(expected).unwrap().hand.last().unwrap();
        session = apply_ok(&session, expected, Action::Discard { card });
    }
}

#[test]
fn draw_from_empty_discard_pile_is_rejected() {
    let session = started(2, 7);
    assert!(session.discard_pile.is_empty());
    let err = apply_action(
        &session,
        "p1",
        &Action::DrawFromDiscard,
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::NoCardsAvailable);
}

#[test]
fn draw_from_discard_takes_only_the_top() {
    let mut session = started(2, 7);
    let tokens = ["2C", "9H", "KD"];
    for tok in tokens {
        session.discard_pile.push(tok.parse().unwrap());
    }
    let after = apply_ok(&session, "p1", Action::DrawFromDeck); // deck draw unaffected
    assert_eq!(after.discard_pile.len(), 3);

    let after = apply_ok(&session, "p1", Action::DrawFromDiscard);
    assert_eq!(after.discard_pile.len(), 2);
    assert_eq!(after.discard_pile.top(), Some("9H".parse().unwrap()));
    assert_eq!(
        *after.players[0].hand.last().unwrap(),
        "KD".parse().unwrap()
    );
}

#[test]
fn empty_deck_reshuffles_discard_below_top() {
    // Deck empty, discard pile has 5 cards with top = 5C: the draw recycles
    // the other 4 into a fresh deck and draws one of them.
    let mut session = started(2, 7);
    session.deck = Deck::reshuffled_with_seed(Vec::new(), 0);
    session.discard_pile = DiscardPile::new();
    let recycled = ["2C", "9H", "KD", "7S"];
    for tok in recycled {
        session.discard_pile.push(tok.parse().unwrap());
    }
    session.discard_pile.push("5C".parse().unwrap());

    let after = apply_ok(&session, "p1", Action::DrawFromDeck);
    assert_eq!(after.discard_pile.cards(), &["5C".parse().unwrap()][..]);
    assert_eq!(after.deck.len(), 3);
    assert_eq!(after.shuffle_count, session.shuffle_count + 1);
    let drawn = *after.players[0].hand.last().unwrap();
    assert!(recycled.iter().any(|t| t.parse::<crate::domain::Card>().unwrap() == drawn));
}

#[test]
fn empty_deck_and_bare_discard_top_fails() {
    let mut session = started(2, 7);
    session.deck = Deck::reshuffled_with_seed(Vec::new(), 0);
    session.discard_pile = DiscardPile::new();
    session.discard_pile.push("5C".parse().unwrap());

    let err = apply_action(
        &session,
        "p1",
        &Action::DrawFromDeck,
        &GameConfig::default(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err, GameError::NoCardsAvailable);
}

#[test]
fn play_actions_rejected_outside_in_progress() {
    let session = lobby(2, 7);
    for action in [
        Action::DrawFromDeck,
        Action::DrawFromDiscard,
        Action::Discard {
            card: "AS".parse().unwrap(),
        },
        Action::Declare,
    ] {
        let err =
            apply_action(&session, "p1", &action, &GameConfig::default(), now()).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPhaseForAction { phase: Phase::Lobby },
            "{action:?}"
        );
    }
}

#[test]
fn successful_actions_bump_version() {
    let session = lobby(1, 7);
    let joined = apply_ok(&session, "p2", join_as(2));
    assert_eq!(joined.version, session.version + 1);
    let live = apply_ok(&joined, "p1", Action::StartGame);
    assert_eq!(live.version, joined.version + 1);
}
