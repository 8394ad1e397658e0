//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical copy of a card in a game. It pairs a shared
//! `CardDefinition` with the flags that change during play. Instances move
//! between zones but keep their `instance_id` for their whole life.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use crate::core::entity::InstanceId;
use crate::core::player::Seat;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub instance_id: InstanceId,

    /// The printed card this copy is.
    pub definition: Arc<CardDefinition>,

    /// Seat whose deck this copy was built into. Banished cards return to
    /// their owner's discard.
    pub owner: Seat,

    /// Tapped / used this turn.
    pub exerted: bool,

    /// Summoning sickness: the card cannot quest or challenge while set.
    pub dried: bool,

    /// Face-down (set while the card sits in the inkwell).
    pub face_down: bool,

    /// Damage accumulated from challenges.
    pub damage: u32,
}

impl CardInstance {
    /// Create a fresh instance as deck construction does: ready, face-up,
    /// undamaged, and dried until its first ready step.
    #[must_use]
    pub fn new(instance_id: InstanceId, definition: Arc<CardDefinition>, owner: Seat) -> Self {
        Self {
            instance_id,
            definition,
            owner,
            exerted: false,
            dried: true,
            face_down: false,
            damage: 0,
        }
    }

    /// Card name, for logging.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// True when the card may quest or challenge.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.exerted && !self.dried
    }

    /// True once accumulated damage reaches the card's willpower.
    ///
    /// Cards without willpower are never banished by damage.
    #[must_use]
    pub fn is_banished(&self) -> bool {
        self.definition
            .willpower
            .is_some_and(|willpower| self.damage >= willpower)
    }

    /// Copy entering the inkwell: face-down and ready.
    #[must_use]
    pub fn into_ink(self) -> Self {
        Self {
            face_down: true,
            exerted: false,
            ..self
        }
    }

    /// Copy entering the field: face-up, ready, but dried.
    #[must_use]
    pub fn into_play(self) -> Self {
        Self {
            face_down: false,
            exerted: false,
            dried: true,
            ..self
        }
    }

    /// Copy entering the discard pile: inert, face-up, damage cleared.
    #[must_use]
    pub fn into_discard(self) -> Self {
        Self {
            face_down: false,
            exerted: false,
            dried: false,
            damage: 0,
            ..self
        }
    }
}
