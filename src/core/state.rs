//! Game state: per-seat state and the whole-table snapshot.
//!
//! ## PlayerState
//!
//! One seat's five zones, lore total and the once-per-turn ink flag.
//!
//! ## GameState
//!
//! Complete game state:
//! - Turn counter, phase and active seat
//! - Both seats' `PlayerState`
//! - Click-to-select target and the UI loading flag
//! - Instance id allocator and the log of accepted actions
//!
//! Every collection is an `im` persistent structure, so `clone()` is cheap
//! and snapshots for undo share almost all of their memory.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::entity::{IdAllocator, InstanceId};
use super::player::{Seat, SeatMap};
use crate::cards::CardInstance;
use crate::zones::{Zone, ZoneManager};

/// Turn phases, in the order a turn passes through them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Ready step: the active seat's cards are readied.
    #[default]
    Ready,
    /// Draw step.
    Draw,
    /// Main phase: the active seat inks, plays, quests and challenges.
    Main,
    /// End of turn.
    End,
}

/// One seat's state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The five zones.
    pub zones: ZoneManager,

    /// Lore total. Never decreases in normal play.
    pub lore: u32,

    /// Set once the seat has inked a card this turn.
    pub ink_committed: bool,
}

impl PlayerState {
    /// A seat with `deck` as its draw pile and nothing else.
    #[must_use]
    pub fn with_deck(deck: Vector<CardInstance>) -> Self {
        Self {
            zones: ZoneManager::with_deck(deck),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Vector<CardInstance> {
        self.zones.deck()
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        self.zones.hand()
    }

    #[must_use]
    pub fn inkwell(&self) -> &Vector<CardInstance> {
        self.zones.inkwell()
    }

    #[must_use]
    pub fn field(&self) -> &Vector<CardInstance> {
        self.zones.field()
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<CardInstance> {
        self.zones.discard()
    }

    /// Ink available to spend: inkwell cards that are not exerted.
    #[must_use]
    pub fn available_ink(&self) -> u32 {
        self.inkwell().iter().filter(|c| !c.exerted).count() as u32
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Turn number (starts at 1, +1 per completed turn).
    pub turn: u32,

    /// Current phase of the active seat's turn.
    pub phase: Phase,

    /// Seat whose turn it is. Together with `turn` and `phase` this decides
    /// whose ink and dried constraints are live.
    pub active: Seat,

    /// Per-seat zones, lore and ink flag.
    pub players: SeatMap<PlayerState>,

    /// Field card currently targeted by click-to-select.
    pub selected: Option<InstanceId>,

    /// Set while the presentation layer is still bootstrapping.
    pub loading: bool,

    /// Mints ids for new card instances.
    pub ids: IdAllocator,

    /// Every accepted action, oldest first.
    pub action_log: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// An empty table: turn 1, player to act, main phase, no cards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            turn: 1,
            phase: Phase::Main,
            active: Seat::Player,
            players: SeatMap::default(),
            selected: None,
            loading: false,
            ids: IdAllocator::new(),
            action_log: Vector::new(),
        }
    }

    /// Placeholder shown before setup finishes.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            phase: Phase::Ready,
            ..Self::new()
        }
    }

    /// State of a seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat]
    }

    /// Mutable state of a seat.
    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerState {
        &mut self.players[seat]
    }

    /// State of the seat whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &PlayerState {
        &self.players[self.active]
    }

    /// Find a card anywhere on the table.
    #[must_use]
    pub fn locate(&self, id: InstanceId) -> Option<(Seat, Zone)> {
        Seat::ALL
            .into_iter()
            .find_map(|seat| self.players[seat].zones.locate(id).map(|zone| (seat, zone)))
    }

    /// Get a card instance wherever it is.
    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        let (seat, zone) = self.locate(id)?;
        self.players[seat].zones.find(zone, id)
    }

    /// Total cards across all ten zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|(_, p)| p.zones.total_cards()).sum()
    }

    /// Check that every instance id appears exactly once across all ten
    /// zones. Returns the first duplicated id if not.
    pub fn check_zone_integrity(&self) -> Result<(), InstanceId> {
        let mut seen = FxHashSet::default();
        for (_, player) in self.players.iter() {
            for (_, card) in player.zones.iter() {
                if !seen.insert(card.instance_id) {
                    return Err(card.instance_id);
                }
            }
        }
        Ok(())
    }

    /// Append an accepted action to the log.
    pub fn record_action(&mut self, seat: Seat, action: super::action::Action) {
        let sequence = self.action_log.len() as u32;
        self.action_log
            .push_back(ActionRecord::new(seat, action, self.turn, sequence));
    }
}
