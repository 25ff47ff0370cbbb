//! Engine configuration.
//!
//! Player count bounds and the initial hand size are deliberately
//! configuration, not hard-coded invariants; the 52-card bound is still
//! enforced at validation time and again when dealing.

use time::Duration;

use crate::errors::GameError;

pub const DEFAULT_MIN_PLAYERS: usize = 2;
pub const DEFAULT_MAX_PLAYERS: usize = 6;
pub const DEFAULT_INITIAL_HAND_SIZE: usize = 7;
pub const DEFAULT_ENDED_RETENTION: Duration = Duration::hours(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimum players required to start a game.
    pub min_players: usize,
    /// Join attempts beyond this reject with `GameFull`.
    pub max_players: usize,
    /// Cards dealt to each player at `StartGame`.
    pub initial_hand_size: usize,
    /// How long `Ended` sessions stay listed before the eviction sweep
    /// removes them.
    pub ended_retention: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            initial_hand_size: DEFAULT_INITIAL_HAND_SIZE,
            ended_retention: DEFAULT_ENDED_RETENTION,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `LEASTCOUNT_*` environment variables.
    pub fn from_env() -> Result<Self, GameError> {
        let mut config = Self::default();
        if let Some(v) = read_env_usize("LEASTCOUNT_MIN_PLAYERS")? {
            config.min_players = v;
        }
        if let Some(v) = read_env_usize("LEASTCOUNT_MAX_PLAYERS")? {
            config.max_players = v;
        }
        if let Some(v) = read_env_usize("LEASTCOUNT_INITIAL_HAND_SIZE")? {
            config.initial_hand_size = v;
        }
        if let Some(v) = read_env_usize("LEASTCOUNT_ENDED_RETENTION_SECS")? {
            config.ended_retention = Duration::seconds(v as i64);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players < 2 {
            return Err(GameError::InvalidConfig(
                "min_players must be at least 2".into(),
            ));
        }
        if self.max_players < self.min_players {
            return Err(GameError::InvalidConfig(format!(
                "max_players {} below min_players {}",
                self.max_players, self.min_players
            )));
        }
        if self.initial_hand_size == 0 {
            return Err(GameError::InvalidConfig(
                "initial_hand_size must be positive".into(),
            ));
        }
        if self.max_players * self.initial_hand_size > 52 {
            return Err(GameError::InvalidConfig(format!(
                "{} players x {} cards exceeds the 52-card deck",
                self.max_players, self.initial_hand_size
            )));
        }
        Ok(())
    }
}

fn read_env_usize(key: &str) -> Result<Option<usize>, GameError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| GameError::InvalidConfig(format!("{key} must be an integer, got {raw:?}"))),
        Err(_) => Ok(None),
    }
}
