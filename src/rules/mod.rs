//! Game rules: action resolution, turn sequencing, win check and setup.
//!
//! Everything here is a pure function of its inputs. Rule functions take a
//! state by reference and return a fresh one; `RulesEngine` routes an
//! `Action` to the right function and records it in the action log.

pub mod rejection;
pub mod actions;
pub mod turn;
pub mod win;
pub mod engine;
pub mod setup;

pub use rejection::Rejection;
pub use actions::{
    add_to_inkwell, challenge_card, draw_card, ink_card, play_card, quest_card, select_card,
    toggle_exert, try_add_to_inkwell, try_challenge_card, try_ink_card, try_play_card,
    try_quest_card, try_select_card, try_toggle_exert, InkPolicy,
};
pub use turn::{end_turn, ready_phase, start_turn};
pub use win::{has_won, winner, GameResult};
pub use engine::{Engine, RulesEngine};
pub use setup::GameBuilder;
