//! # deckforge
//!
//! Rules and state engine for a two-seat trading card game played with
//! ink, quests and challenges.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every rule is a function from a state to a new
//!    state. Inputs are never modified, so any prior state can be kept.
//!
//! 2. **Silent Core, Explaining Boundary**: Plain rule functions return the
//!    input unchanged on invalid moves. `try_*` forms, `RulesEngine` and
//!    `GameStore` say why with a `Rejection`.
//!
//! 3. **Injectable Randomness**: Deck building and shuffling take any
//!    `RandomSource`; games are reproducible from a seed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so undo
//!   snapshots are cheap.
//!
//! - **Single Writer**: `GameStore` owns the live state and its history.
//!
//! ## Modules
//!
//! - `core`: Instance ids, seats, state, actions, RNG, configuration
//! - `cards`: Card definitions, instances, the registry and starter set
//! - `zones`: The five per-seat zones
//! - `deck`: Deck construction and shuffling
//! - `rules`: Action resolution, turns, win check, setup, `RulesEngine`
//! - `history`: Undo stack and `GameStore`

pub mod core;
pub mod cards;
pub mod zones;
pub mod deck;
pub mod rules;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, IdAllocator, Seat, SeatMap,
    GameRng, RandomSource, ScriptedRng,
    GameConfig, ConfigError,
    Action, ActionRecord,
    GameState, Phase, PlayerState,
};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardRegistry, CardType, PoolError, Rarity,
};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::deck::{create_deck, shuffle_deck};

pub use crate::rules::{Engine, GameBuilder, GameResult, InkPolicy, Rejection, RulesEngine};

pub use crate::history::{GameStore, HistoryManager};
