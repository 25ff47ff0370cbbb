// Builders for sessions in known states, used across the domain test suites.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::actions::{apply_action, Action};
use crate::domain::state::{Phase, Session};
use crate::domain::try_parse_cards;

pub fn now() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

pub fn player(n: usize) -> String {
    format!("p{n}")
}

/// Lobby session with players p1..=pn seated in order.
pub fn lobby(player_count: usize, seed: u64) -> Session {
    assert!(player_count >= 1);
    let config = GameConfig::default();
    let mut session = Session::new(Uuid::new_v4(), player(1), "Player 1".into(), seed, now());
    for n in 2..=player_count {
        session = apply_action(
            &session,
            &player(n),
            &Action::Join {
                display_name: format!("Player {n}"),
            },
            &config,
            now(),
        )
        .expect("join");
    }
    session
}

/// Session with hands dealt and p1 to act.
pub fn started(player_count: usize, seed: u64) -> Session {
    let session = lobby(player_count, seed);
    apply_action(
        &session,
        &player(1),
        &Action::StartGame,
        &GameConfig::default(),
        now(),
    )
    .expect("start")
}

pub fn apply_ok(session: &Session, actor: &str, action: Action) -> Session {
    apply_action(session, actor, &action, &GameConfig::default(), now())
        .unwrap_or_else(|e| panic!("{actor} {action:?} rejected: {e}"))
}

/// Overwrite a player's hand from card tokens (for scripted scoring
/// scenarios where the exact cards matter).
pub fn set_hand(session: &mut Session, actor: &str, tokens: &[&str]) {
    let hand = try_parse_cards(tokens.iter().copied()).expect("valid tokens");
    session
        .player_mut(actor)
        .unwrap_or_else(|| panic!("no player {actor}"))
        .hand = hand;
}

/// Put the session in the state right after `actor` completed a full
/// draw+discard turn, making a declaration legal.
pub fn open_declare_window(session: &mut Session, actor: &str) {
    assert_eq!(session.phase, Phase::InProgress);
    session.has_drawn = false;
    session.last_completed_turn = Some(actor.to_string());
}
