//! Rules engine trait and the standard engine.
//!
//! The engine turns an `Action` into a new `GameState`:
//! - Which actions are legal right now
//! - How an action changes the state
//! - When the game is over
//!
//! The engine does not gate on game over. It will apply a quest after
//! someone has already won; stopping play at that point is the job of
//! `history::GameStore`.

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::state::GameState;
use crate::zones::Zone;

use super::actions::{
    try_challenge_card, try_ink_card, try_play_card, try_quest_card, try_toggle_exert, InkPolicy,
};
use super::rejection::Rejection;
use super::turn::end_turn;
use super::win::{winner, GameResult};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: pure; must never modify its input
/// - `apply_action`: appends accepted actions to the state's log
/// - `is_terminal`: return `None` if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Apply an action for the active seat.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, Rejection>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate every action the active seat could take right now.
    ///
    /// Manual exert toggles are left out; they are always available on
    /// any field card and are not moves in their own right.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        candidate_actions(state)
            .into_iter()
            .filter(|action| self.apply_action(state, action).is_ok())
            .collect()
    }
}

/// Every structurally possible action for the active seat, legal or not.
fn candidate_actions(state: &GameState) -> Vec<Action> {
    let player = state.active_player();
    let opposing = state.player(state.active.other());
    let mut actions = Vec::new();

    for card in player.zones.zone(Zone::Hand) {
        actions.push(Action::Ink { card: card.instance_id });
        actions.push(Action::Play {
            card: card.instance_id,
            target: None,
        });
    }
    for card in player.zones.zone(Zone::Field) {
        actions.push(Action::Quest { card: card.instance_id });
        for defender in opposing.zones.zone(Zone::Field) {
            actions.push(Action::Challenge {
                attacker: card.instance_id,
                defender: defender.instance_id,
            });
        }
    }
    actions.push(Action::EndTurn);
    actions
}

/// The standard rules, parameterised by a `GameConfig`.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: GameConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    fn ink_policy(&self) -> InkPolicy {
        if self.config.enforce_ink_cost {
            InkPolicy::Pay
        } else {
            InkPolicy::Free
        }
    }
}

impl RulesEngine for Engine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, Rejection> {
        let seat = state.active;
        let mut next = match *action {
            Action::Ink { card } => try_ink_card(state, card)?,
            Action::Play { card, target } => try_play_card(state, card, target, self.ink_policy())?,
            Action::Quest { card } => try_quest_card(state, card)?,
            Action::Challenge { attacker, defender } => try_challenge_card(state, attacker, defender)?,
            Action::ToggleExert { card } => try_toggle_exert(state, card)?,
            Action::EndTurn => end_turn(state),
        };
        next.record_action(seat, action.clone());
        Ok(next)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        winner(state, self.config.lore_to_win)
    }
}
