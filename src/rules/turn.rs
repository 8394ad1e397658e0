//! Turn sequencing: Ready, Draw, Main, End.

use crate::core::state::{GameState, Phase, PlayerState};
use crate::zones::Zone;

use super::actions::draw_card;

/// Ready step for one seat.
///
/// Readies every field and inkwell card, lets field cards dry, and allows
/// one more ink. Hand, deck and discard are untouched.
#[must_use]
pub fn ready_phase(player: &PlayerState) -> PlayerState {
    let mut next = player.clone();
    next.ink_committed = false;
    next.zones.update_all(Zone::Field, |c| {
        c.exerted = false;
        c.dried = false;
    });
    next.zones.update_all(Zone::Inkwell, |c| c.exerted = false);
    next
}

/// Begin the next seat's turn.
///
/// Advances the turn counter, hands control to the other seat, runs its
/// Ready step, draws one card and leaves the game in the Main phase. Any
/// selection is cleared.
#[must_use]
pub fn start_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    let seat = state.active.other();
    next.turn += 1;
    next.active = seat;

    next.phase = Phase::Ready;
    next.players[seat] = ready_phase(&next.players[seat]);

    next.phase = Phase::Draw;
    next.players[seat] = draw_card(&next.players[seat], 1);

    next.phase = Phase::Main;
    next.selected = None;
    next
}

/// End the active seat's turn and start the other seat's.
#[must_use]
pub fn end_turn(state: &GameState) -> GameState {
    let mut ended = state.clone();
    ended.phase = Phase::End;
    start_turn(&ended)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardDefinition, CardId, CardInstance, CardType};
    use crate::core::entity::InstanceId;
    use crate::core::player::Seat;
    use crate::zones::ZonePosition;

    fn card(id: u32, owner: Seat) -> CardInstance {
        let def = Arc::new(
            CardDefinition::new(CardId::new(1, 1), "Card", CardType::Character).with_stats(1, 1, 1),
        );
        CardInstance::new(InstanceId(id), def, owner)
    }

    #[test]
    fn test_ready_phase_resets_flags() {
        let mut player = PlayerState::default();
        let mut field = card(1, Seat::Player);
        field.exerted = true;
        let mut ink = card(2, Seat::Player).into_ink();
        ink.exerted = true;
        let mut hand = card(3, Seat::Player);
        hand.exerted = true;
        player.zones.place(Zone::Field, field, ZonePosition::Back);
        player.zones.place(Zone::Inkwell, ink, ZonePosition::Back);
        player.zones.place(Zone::Hand, hand, ZonePosition::Back);
        player.ink_committed = true;

        let next = ready_phase(&player);

        assert!(!next.ink_committed);
        assert!(!next.field()[0].exerted);
        assert!(!next.field()[0].dried);
        assert!(!next.inkwell()[0].exerted);
        assert!(next.inkwell()[0].face_down);
        assert!(next.hand()[0].exerted);
    }

    #[test]
    fn test_end_turn_hands_over() {
        let mut state = GameState::new();
        for i in 0..3 {
            state.players[Seat::Opponent]
                .zones
                .place(Zone::Deck, card(i, Seat::Opponent), ZonePosition::Back);
        }
        state.selected = Some(InstanceId(0));

        let next = end_turn(&state);

        assert_eq!(next.turn, 2);
        assert_eq!(next.active, Seat::Opponent);
        assert_eq!(next.phase, Phase::Main);
        assert_eq!(next.selected, None);
        assert_eq!(next.player(Seat::Opponent).hand().len(), 1);
        assert_eq!(next.player(Seat::Opponent).deck().len(), 2);

        let back = end_turn(&next);
        assert_eq!(back.turn, 3);
        assert_eq!(back.active, Seat::Player);
    }

    #[test]
    fn test_start_turn_readies_only_new_active_seat() {
        let mut state = GameState::new();
        let mut mine = card(1, Seat::Player);
        mine.exerted = true;
        state.players[Seat::Player].zones.place(Zone::Field, mine, ZonePosition::Back);
        state.players[Seat::Player].ink_committed = true;

        let next = start_turn(&state);

        assert!(next.player(Seat::Player).field()[0].exerted);
        assert!(next.player(Seat::Player).ink_committed);
    }
}
