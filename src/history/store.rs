//! Single-writer container for a running game.
//!
//! `GameStore` owns the current `GameState`, the undo history and the rules
//! engine. Every change goes through it:
//! - `dispatch` applies an action and snapshots the prior state
//! - `select` changes the click-to-select target without a snapshot
//! - `undo` restores the latest snapshot
//! - `restart` deals a fresh game
//!
//! ## Usage
//!
//! ```
//! use deckforge::core::{Action, GameConfig};
//! use deckforge::history::GameStore;
//!
//! let mut store = GameStore::new(GameConfig::default(), 7).unwrap();
//! let card = store.state().active_player().hand()[0].instance_id;
//!
//! store.dispatch(Action::Play { card, target: None }).unwrap();
//! assert_eq!(store.history().len(), 1);
//!
//! assert!(store.undo());
//! assert_eq!(store.state().active_player().hand().len(), 7);
//! ```

use tracing::debug;

use crate::cards::CardRegistry;
use crate::core::action::Action;
use crate::core::config::{ConfigError, GameConfig};
use crate::core::entity::InstanceId;
use crate::core::state::GameState;
use crate::rules::{try_select_card, Engine, GameBuilder, GameResult, Rejection, RulesEngine};

use super::manager::HistoryManager;

#[derive(Clone, Debug)]
pub struct GameStore {
    engine: Engine,
    builder: GameBuilder,
    state: GameState,
    history: HistoryManager,
    seed: u64,
}

impl GameStore {
    /// Start a game with the starter card set.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_registry(config, CardRegistry::starter(), seed)
    }

    /// Start a game with decks drawn from `registry`.
    pub fn with_registry(config: GameConfig, registry: CardRegistry, seed: u64) -> Result<Self, ConfigError> {
        let builder = GameBuilder::new().config(config.clone()).registry(registry);
        let state = builder.build(seed)?;
        debug!(seed, "game started");
        Ok(Self {
            history: HistoryManager::new(config.history_limit),
            engine: Engine::new(config),
            builder,
            state,
            seed,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Seed the current game was dealt from. Passing it to `restart`
    /// deals the same opening again.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current result, recomputed from the lore totals.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.engine.is_terminal(&self.state)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Actions the active seat can take now; none once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.engine.legal_actions(&self.state)
    }

    /// Apply an action for the active seat.
    ///
    /// On success the prior state is pushed onto the history. A rejected
    /// action leaves both the state and the history untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<&GameState, Rejection> {
        if self.is_game_over() {
            debug!(action = action.name(), "rejected: game over");
            return Err(Rejection::GameOver);
        }

        match self.engine.apply_action(&self.state, &action) {
            Ok(next) => {
                let prior = std::mem::replace(&mut self.state, next);
                self.history.record(prior);
                debug!(
                    action = action.name(),
                    cards = ?action.cards(),
                    seat = %self.state.active,
                    turn = self.state.turn,
                    "action applied"
                );
                if let Some(result) = self.winner() {
                    debug!(?result, "game over");
                }
                Ok(&self.state)
            }
            Err(rejection) => {
                debug!(action = action.name(), cards = ?action.cards(), %rejection, "action rejected");
                Err(rejection)
            }
        }
    }

    /// Set or clear the selected field card. Not recorded in history.
    pub fn select(&mut self, card: Option<InstanceId>) -> Result<(), Rejection> {
        self.state = try_select_card(&self.state, card)?;
        Ok(())
    }

    /// Restore the most recent snapshot. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(prior) => {
                self.state = prior;
                debug!(remaining = self.history.len(), "undo");
                true
            }
            None => false,
        }
    }

    /// Deal a new game with `seed` and forget the history.
    pub fn restart(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.state = self.builder.build(seed)?;
        self.seed = seed;
        self.history.clear();
        debug!(seed, "game restarted");
        Ok(())
    }

    // === Convenience Methods ===

    pub fn ink(&mut self, card: InstanceId) -> Result<&GameState, Rejection> {
        self.dispatch(Action::Ink { card })
    }

    pub fn play(&mut self, card: InstanceId, target: Option<InstanceId>) -> Result<&GameState, Rejection> {
        self.dispatch(Action::Play { card, target })
    }

    pub fn quest(&mut self, card: InstanceId) -> Result<&GameState, Rejection> {
        self.dispatch(Action::Quest { card })
    }

    pub fn challenge(&mut self, attacker: InstanceId, defender: InstanceId) -> Result<&GameState, Rejection> {
        self.dispatch(Action::Challenge { attacker, defender })
    }

    pub fn toggle_exert(&mut self, card: InstanceId) -> Result<&GameState, Rejection> {
        self.dispatch(Action::ToggleExert { card })
    }

    pub fn end_turn(&mut self) -> Result<&GameState, Rejection> {
        self.dispatch(Action::EndTurn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Seat;

    fn store() -> GameStore {
        GameStore::new(GameConfig::default().with_opponent_field(2), 3).unwrap()
    }

    fn first_in_hand(store: &GameStore) -> InstanceId {
        store.state().active_player().hand()[0].instance_id
    }

    #[test]
    fn test_rejected_dispatch_records_nothing() {
        let mut store = store();
        let before = store.state().clone();

        let err = store.quest(InstanceId(9999));

        assert!(matches!(err, Err(Rejection::NotInZone { .. })));
        assert_eq!(store.state(), &before);
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_select_skips_history() {
        let mut store = store();
        let target = store.state().player(Seat::Opponent).field()[0].instance_id;

        store.select(Some(target)).unwrap();

        assert_eq!(store.state().selected, Some(target));
        assert!(store.history().is_empty());

        let in_hand = first_in_hand(&store);
        assert_eq!(store.select(Some(in_hand)), Err(Rejection::NotOnField(in_hand)));
        assert_eq!(store.state().selected, Some(target));
    }

    #[test]
    fn test_restart_clears_history() {
        let mut store = store();
        let card = first_in_hand(&store);
        store.play(card, None).unwrap();
        store.end_turn().unwrap();
        assert_eq!(store.history().len(), 2);

        store.restart(4).unwrap();

        assert!(store.history().is_empty());
        assert_eq!(store.state().turn, 1);
        assert!(store.state().action_log.is_empty());
        assert!(!store.undo());
        assert_eq!(store.seed(), 4);
    }

    #[test]
    fn test_restart_with_own_seed_redeals() {
        let mut store = store();
        let opening = store.state().clone();
        let card = first_in_hand(&store);
        store.play(card, None).unwrap();

        store.restart(store.seed()).unwrap();

        assert_eq!(store.seed(), 3);
        assert_eq!(store.state(), &opening);
    }

    #[test]
    fn test_history_limit_from_config() {
        let config = GameConfig::default().with_history_limit(2);
        let mut store = GameStore::new(config, 1).unwrap();
        for _ in 0..4 {
            store.end_turn().unwrap();
        }

        assert_eq!(store.history().len(), 2);
        assert!(store.undo());
        assert!(store.undo());
        assert!(!store.undo());
        assert_eq!(store.state().turn, 3);
    }
}
