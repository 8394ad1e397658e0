//! Core engine types: instance ids, seats, state, actions, RNG, configuration.
//!
//! These are the building blocks every other module works on. Rule logic
//! lives in `rules`; this module only describes the data.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{IdAllocator, InstanceId};
pub use player::{Seat, SeatMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{ConfigError, GameConfig};
pub use action::{Action, ActionRecord};
pub use state::{GameState, Phase, PlayerState};
