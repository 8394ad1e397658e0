//! Per-seat zone storage and card movement.
//!
//! The `ZoneManager` owns one seat's five zones. Each zone is an ordered
//! persistent vector of `CardInstance`, so cloning a manager (for a history
//! snapshot) shares structure instead of copying cards. It supports:
//! - Lookup of a card by instance id, in one zone or across all five
//! - Removing a card from a zone and placing it into another
//! - Front-of-deck draws
//! - In-place updates of a card's runtime flags

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::entity::InstanceId;

/// The five zones every seat has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Draw pile, consumed from the front.
    Deck,
    Hand,
    /// Face-down resource cards.
    Inkwell,
    /// Cards in play.
    Field,
    /// Banished / used cards; the last element is the top of the pile.
    Discard,
}

impl Zone {
    /// All zones, in display order.
    pub const ALL: [Zone; 5] = [Zone::Deck, Zone::Hand, Zone::Inkwell, Zone::Field, Zone::Discard];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Inkwell => "inkwell",
            Zone::Field => "field",
            Zone::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// Where to insert a card in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Before every other card (top of the deck).
    Front,
    /// After every other card (insertion order, top of discard).
    Back,
    /// At a specific index, clamped to the zone length.
    Index(usize),
}

/// One seat's zones.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use deckforge::cards::{CardDefinition, CardId, CardInstance, CardType};
/// use deckforge::core::{InstanceId, Seat};
/// use deckforge::zones::{Zone, ZoneManager, ZonePosition};
///
/// let def = Arc::new(CardDefinition::new(CardId::new(1, 1), "Card", CardType::Item));
/// let mut zones = ZoneManager::new();
/// zones.place(Zone::Hand, CardInstance::new(InstanceId(7), def, Seat::Player), ZonePosition::Back);
///
/// assert_eq!(zones.locate(InstanceId(7)), Some(Zone::Hand));
///
/// let moved = zones.move_card(InstanceId(7), Zone::Hand, Zone::Field, ZonePosition::Back, |c| c);
/// assert!(moved);
/// assert_eq!(zones.locate(InstanceId(7)), Some(Zone::Field));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    deck: Vector<CardInstance>,
    hand: Vector<CardInstance>,
    inkwell: Vector<CardInstance>,
    field: Vector<CardInstance>,
    discard: Vector<CardInstance>,
}

impl ZoneManager {
    /// Create a manager with five empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose deck holds `deck` (front = next draw).
    #[must_use]
    pub fn with_deck(deck: Vector<CardInstance>) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<CardInstance> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Inkwell => &self.inkwell,
            Zone::Field => &self.field,
            Zone::Discard => &self.discard,
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vector<CardInstance> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Inkwell => &mut self.inkwell,
            Zone::Field => &mut self.field,
            Zone::Discard => &mut self.discard,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Vector<CardInstance> {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        &self.hand
    }

    #[must_use]
    pub fn inkwell(&self) -> &Vector<CardInstance> {
        &self.inkwell
    }

    #[must_use]
    pub fn field(&self) -> &Vector<CardInstance> {
        &self.field
    }

    #[must_use]
    pub fn discard(&self) -> &Vector<CardInstance> {
        &self.discard
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone(zone).len()
    }

    /// Index of a card within a zone.
    #[must_use]
    pub fn position(&self, zone: Zone, id: InstanceId) -> Option<usize> {
        self.zone(zone).iter().position(|c| c.instance_id == id)
    }

    /// Find a card in a specific zone.
    #[must_use]
    pub fn find(&self, zone: Zone, id: InstanceId) -> Option<&CardInstance> {
        self.zone(zone).iter().find(|c| c.instance_id == id)
    }

    /// Zone currently holding a card, if this seat has it.
    #[must_use]
    pub fn locate(&self, id: InstanceId) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.position(zone, id).is_some())
    }

    /// Check if any zone holds the card.
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.locate(id).is_some()
    }

    /// Remove a card from a zone and return it.
    pub fn take(&mut self, zone: Zone, id: InstanceId) -> Option<CardInstance> {
        let index = self.position(zone, id)?;
        Some(self.zone_mut(zone).remove(index))
    }

    /// Insert a card into a zone.
    pub fn place(&mut self, zone: Zone, card: CardInstance, position: ZonePosition) {
        let cards = self.zone_mut(zone);
        match position {
            ZonePosition::Front => cards.push_front(card),
            ZonePosition::Back => cards.push_back(card),
            ZonePosition::Index(i) => {
                let index = i.min(cards.len());
                cards.insert(index, card);
            }
        }
    }

    /// Move a card between zones, transforming it on the way.
    ///
    /// Returns `false` (and changes nothing) if the card is not in `from`.
    pub fn move_card(
        &mut self,
        id: InstanceId,
        from: Zone,
        to: Zone,
        position: ZonePosition,
        transform: impl FnOnce(CardInstance) -> CardInstance,
    ) -> bool {
        match self.take(from, id) {
            Some(card) => {
                self.place(to, transform(card), position);
                true
            }
            None => false,
        }
    }

    /// Apply `f` to a card in place. Returns `false` if the card is not in `zone`.
    pub fn update(&mut self, zone: Zone, id: InstanceId, f: impl FnOnce(&mut CardInstance)) -> bool {
        let Some(index) = self.position(zone, id) else {
            return false;
        };
        match self.zone_mut(zone).get_mut(index) {
            Some(card) => {
                f(card);
                true
            }
            None => false,
        }
    }

    /// Apply `f` to every card in a zone.
    pub fn update_all(&mut self, zone: Zone, mut f: impl FnMut(&mut CardInstance)) {
        for card in self.zone_mut(zone).iter_mut() {
            f(card);
        }
    }

    /// Move up to `count` cards from the front of the deck to the back of the
    /// hand, preserving their order. Returns how many moved.
    pub fn draw_front(&mut self, count: usize) -> usize {
        let n = count.min(self.deck.len());
        if n == 0 {
            return 0;
        }
        let rest = self.deck.split_off(n);
        let drawn = std::mem::replace(&mut self.deck, rest);
        self.hand.append(drawn);
        n
    }

    /// Get total number of cards across all five zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Zone::ALL.iter().map(|&zone| self.zone_size(zone)).sum()
    }

    /// Every (zone, card) pair, zone by zone.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &CardInstance)> {
        Zone::ALL
            .into_iter()
            .flat_map(move |zone| self.zone(zone).iter().map(move |card| (zone, card)))
    }
}
