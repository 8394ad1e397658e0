//! Card registry: the read-only card pool decks are built from.
//!
//! The `CardRegistry` stores every known definition, in load order, behind
//! `Arc` so instances can share them. Lookup by `CardId` goes through an
//! index map. The pool is either the bundled starter set or the external
//! loader's JSON.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{CardDefinition, CardId};
use super::starter::starter_cards;

/// Errors from building a card pool.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card pool is empty")]
    Empty,

    #[error("card {0} registered twice")]
    Duplicate(CardId),
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{CardDefinition, CardId, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new(1, 1), "Ariel", CardType::Character))
///     .unwrap();
///
/// let found = registry.get(CardId::new(1, 1)).unwrap();
/// assert_eq!(found.name, "Ariel");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Arc<CardDefinition>>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled starter set. Always available without any external fetch.
    #[must_use]
    pub fn starter() -> Self {
        let mut registry = Self::new();
        for card in starter_cards() {
            // Starter ids are unique by construction.
            let _ = registry.register(card);
        }
        registry
    }

    /// Parse a JSON array of loader records.
    ///
    /// Duplicate `(set, number)` pairs and empty arrays are rejected.
    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        let records: Vec<CardDefinition> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(PoolError::Empty);
        }

        let mut registry = Self::new();
        for card in records {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>, PoolError> {
        if self.index.contains_key(&card.id) {
            return Err(PoolError::Duplicate(card.id));
        }
        let card = Arc::new(card);
        self.index.insert(card.id, self.cards.len());
        self.cards.push(Arc::clone(&card));
        Ok(card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All definitions in load order.
    #[must_use]
    pub fn pool(&self) -> &[Arc<CardDefinition>] {
        &self.cards
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.iter()
    }
}
