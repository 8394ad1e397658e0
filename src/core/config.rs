//! Game configuration.
//!
//! `GameConfig` collects every tunable rule constant: the lore threshold,
//! deck and opening-hand sizes, history depth, and optional rule
//! tightenings. It can be built in code with the `with_*` methods or loaded
//! from JSON; missing JSON fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lore needed to win.
pub const DEFAULT_LORE_TO_WIN: u32 = 20;

/// Default constructed deck size.
pub const DEFAULT_DECK_SIZE: usize = 60;

/// Default opening hand size.
pub const DEFAULT_STARTING_HAND: usize = 7;

/// Default number of undo snapshots retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lore_to_win must be at least 1")]
    ZeroLoreThreshold,

    #[error("history_limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("opening hand of {hand} plus {field} opponent field cards exceeds deck size {deck}")]
    DeckTooSmall { deck: usize, hand: usize, field: usize },
}

/// Rule constants for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lore a seat needs to win.
    pub lore_to_win: u32,

    /// Cards per constructed deck.
    pub deck_size: usize,

    /// Cards drawn into each opening hand.
    pub starting_hand: usize,

    /// Maximum undo snapshots kept; the oldest is dropped beyond this.
    pub history_limit: usize,

    /// Require (and spend) ready ink equal to a card's cost when playing it.
    pub enforce_ink_cost: bool,

    /// Cards placed straight onto the scripted opponent's field at setup.
    pub opponent_field: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lore_to_win: DEFAULT_LORE_TO_WIN,
            deck_size: DEFAULT_DECK_SIZE,
            starting_hand: DEFAULT_STARTING_HAND,
            history_limit: DEFAULT_HISTORY_LIMIT,
            enforce_ink_cost: false,
            opponent_field: 0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the constants describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lore_to_win == 0 {
            return Err(ConfigError::ZeroLoreThreshold);
        }
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        if self.starting_hand + self.opponent_field > self.deck_size {
            return Err(ConfigError::DeckTooSmall {
                deck: self.deck_size,
                hand: self.starting_hand,
                field: self.opponent_field,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_lore_to_win(mut self, lore: u32) -> Self {
        self.lore_to_win = lore;
        self
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_hand(mut self, size: usize) -> Self {
        self.starting_hand = size;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_ink_cost(mut self, enforce: bool) -> Self {
        self.enforce_ink_cost = enforce;
        self
    }

    #[must_use]
    pub fn with_opponent_field(mut self, count: usize) -> Self {
        self.opponent_field = count;
        self
    }
}
