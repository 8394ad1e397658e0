//! Lore win condition.

use serde::{Deserialize, Serialize};

use crate::core::player::Seat;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Both seats reached the threshold at once.
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }
}

/// Whether `seat` has at least `lore_to_win` lore.
#[must_use]
pub fn has_won(state: &GameState, seat: Seat, lore_to_win: u32) -> bool {
    state.player(seat).lore >= lore_to_win
}

/// The game result, or `None` while neither seat has reached the threshold.
///
/// ```
/// use deckforge::core::{GameState, Seat};
/// use deckforge::rules::{winner, GameResult};
///
/// let mut state = GameState::new();
/// assert_eq!(winner(&state, 20), None);
///
/// state.player_mut(Seat::Opponent).lore = 21;
/// assert_eq!(winner(&state, 20), Some(GameResult::Winner(Seat::Opponent)));
/// ```
#[must_use]
pub fn winner(state: &GameState, lore_to_win: u32) -> Option<GameResult> {
    match (
        has_won(state, Seat::Player, lore_to_win),
        has_won(state, Seat::Opponent, lore_to_win),
    ) {
        (true, true) => Some(GameResult::Draw),
        (true, false) => Some(GameResult::Winner(Seat::Player)),
        (false, true) => Some(GameResult::Winner(Seat::Opponent)),
        (false, false) => None,
    }
}
