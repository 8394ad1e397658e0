//! Building a fresh game.

use crate::cards::CardRegistry;
use crate::core::config::{ConfigError, GameConfig};
use crate::core::player::Seat;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{GameState, Phase, PlayerState};
use crate::deck::{create_deck, shuffle_deck};
use crate::zones::{Zone, ZonePosition};

use super::actions::draw_card;

/// Builder for an opening `GameState`.
///
/// ```
/// use deckforge::core::{GameConfig, Seat};
/// use deckforge::rules::GameBuilder;
///
/// let state = GameBuilder::new()
///     .config(GameConfig::default().with_opponent_field(2))
///     .build(42)
///     .unwrap();
///
/// assert_eq!(state.player(Seat::Player).hand().len(), 7);
/// assert_eq!(state.player(Seat::Opponent).field().len(), 2);
/// assert!(!state.loading);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    registry: CardRegistry,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            registry: CardRegistry::starter(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(mut self, registry: CardRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Build with a seeded `GameRng`.
    pub fn build(&self, seed: u64) -> Result<GameState, ConfigError> {
        self.build_with(&mut GameRng::new(seed))
    }

    /// Build the opening state.
    ///
    /// Each seat gets a deck drawn from the registry and shuffled, then
    /// draws its opening hand. The opponent's first `opponent_field` deck
    /// cards go straight onto its field, ready and dry. The player acts
    /// first, in the Main phase of turn 1.
    pub fn build_with<R: RandomSource>(&self, rng: &mut R) -> Result<GameState, ConfigError> {
        self.config.validate()?;

        let mut state = GameState::loading();
        for seat in Seat::ALL {
            let deck = create_deck(
                self.registry.pool(),
                self.config.deck_size,
                seat,
                &mut state.ids,
                rng,
            );
            let deck = shuffle_deck(&deck, rng);
            state.players[seat] = draw_card(&PlayerState::with_deck(deck), self.config.starting_hand);
        }

        let opponent = &mut state.players[Seat::Opponent].zones;
        for _ in 0..self.config.opponent_field {
            let Some(id) = opponent.deck().front().map(|c| c.instance_id) else {
                break;
            };
            opponent.move_card(id, Zone::Deck, Zone::Field, ZonePosition::Back, |mut card| {
                card.dried = false;
                card
            });
        }

        state.phase = Phase::Main;
        state.loading = false;
        Ok(state)
    }
}
