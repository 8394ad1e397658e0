//! Action representation.
//!
//! An `Action` is one request from the presentation layer: a verb plus the
//! card instances it names. Actions are always performed by the active seat;
//! the seat is not part of the action itself.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::Seat;

/// A game action.
///
/// ## Example
///
/// ```
/// use deckforge::core::{Action, InstanceId};
///
/// let quest = Action::Quest { card: InstanceId(4) };
/// assert_eq!(quest.cards(), vec![InstanceId(4)]);
///
/// let challenge = Action::Challenge {
///     attacker: InstanceId(4),
///     defender: InstanceId(9),
/// };
/// assert_eq!(challenge.cards().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put an inkable hand card face-down into the inkwell.
    Ink { card: InstanceId },
    /// Play a hand card onto the field. `target` is recorded but has no effect.
    Play {
        card: InstanceId,
        target: Option<InstanceId>,
    },
    /// Exert a ready field card for its lore.
    Quest { card: InstanceId },
    /// Attack an exerted opposing card.
    Challenge {
        attacker: InstanceId,
        defender: InstanceId,
    },
    /// Manually flip a field card's exerted flag.
    ToggleExert { card: InstanceId },
    /// Finish the active seat's turn and start the other seat's.
    EndTurn,
}

impl Action {
    /// Short verb name, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Ink { .. } => "ink",
            Action::Play { .. } => "play",
            Action::Quest { .. } => "quest",
            Action::Challenge { .. } => "challenge",
            Action::ToggleExert { .. } => "toggle_exert",
            Action::EndTurn => "end_turn",
        }
    }

    /// Every card instance this action names, in order.
    #[must_use]
    pub fn cards(&self) -> Vec<InstanceId> {
        match *self {
            Action::Ink { card } | Action::Quest { card } | Action::ToggleExert { card } => {
                vec![card]
            }
            Action::Play { card, target } => std::iter::once(card).chain(target).collect(),
            Action::Challenge { attacker, defender } => vec![attacker, defender],
            Action::EndTurn => Vec::new(),
        }
    }
}

/// An accepted action with metadata, kept in the game's action log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that performed the action.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the log (0-based, across the whole game).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_cards() {
        assert_eq!(Action::EndTurn.cards(), Vec::<InstanceId>::new());
        assert_eq!(
            Action::Play { card: InstanceId(1), target: None }.cards(),
            vec![InstanceId(1)]
        );
        assert_eq!(
            Action::Play { card: InstanceId(1), target: Some(InstanceId(2)) }.cards(),
            vec![InstanceId(1), InstanceId(2)]
        );
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::Ink { card: InstanceId(0) }.name(), "ink");
        assert_eq!(Action::EndTurn.name(), "end_turn");
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::Quest { card: InstanceId(5) };
        let a2 = Action::Quest { card: InstanceId(5) };
        let a3 = Action::Quest { card: InstanceId(6) };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_action_record_serialization() {
        let action = Action::Challenge {
            attacker: InstanceId(1),
            defender: InstanceId(2),
        };
        let record = ActionRecord::new(Seat::Opponent, action, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
