//! Why an action was refused.
//!
//! The plain rule functions silently return the input state on invalid
//! input. Their `try_*` forms, the `RulesEngine` and the `GameStore` report
//! the reason instead, so a presentation layer can explain a refused drag.

use thiserror::Error;

use crate::core::entity::InstanceId;
use crate::zones::Zone;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over; undo or restart to continue")]
    GameOver,

    #[error("a card has already been inked this turn")]
    InkAlreadyCommitted,

    #[error("{card} is not in the acting {zone}")]
    NotInZone { card: InstanceId, zone: Zone },

    #[error("{0} is not inkable")]
    NotInkable(InstanceId),

    #[error("{0} is exerted")]
    Exerted(InstanceId),

    #[error("{0} is still drying")]
    Dried(InstanceId),

    #[error("{0} is not on the opposing field")]
    NotOpposing(InstanceId),

    #[error("{0} is ready and cannot be challenged")]
    DefenderReady(InstanceId),

    #[error("{0} has no willpower and cannot take part in a challenge")]
    NotACharacter(InstanceId),

    #[error("card costs {cost} ink but only {available} is ready")]
    InsufficientInk { cost: u32, available: u32 },

    #[error("{0} is not on a field")]
    NotOnField(InstanceId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Rejection::NotInZone { card: InstanceId(3), zone: Zone::Hand };
        assert_eq!(err.to_string(), "card-3 is not in the acting hand");

        let err = Rejection::NotOpposing(InstanceId(9));
        assert_eq!(err.to_string(), "card-9 is not on the opposing field");

        let err = Rejection::InsufficientInk { cost: 4, available: 2 };
        assert_eq!(err.to_string(), "card costs 4 ink but only 2 is ready");
    }
}
