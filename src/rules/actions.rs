//! Action resolution: drawing, inking, playing, questing, challenging.
//!
//! Every function takes a state by reference and returns a new one; the
//! input is never modified. Each action comes in two forms:
//! - `try_*` returns `Err(Rejection)` when a precondition fails
//! - the plain form returns an unchanged copy of the input instead
//!
//! GameState-level actions always act for `state.active`.

use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::entity::InstanceId;
use crate::core::player::Seat;
use crate::core::state::{GameState, PlayerState};
use crate::zones::{Zone, ZonePosition};

use super::rejection::Rejection;

/// Whether playing a card checks and spends ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InkPolicy {
    /// Cards are played for free.
    #[default]
    Free,
    /// Ready ink must cover the cost; that many ink cards are exerted.
    Pay,
}

/// Draw `count` cards from the front of the deck into hand.
///
/// Draws `min(count, deck size)` cards; an empty deck leaves the state
/// unchanged. Running out of cards is not a loss.
#[must_use]
pub fn draw_card(player: &PlayerState, count: usize) -> PlayerState {
    let mut next = player.clone();
    next.zones.draw_front(count);
    next
}

/// Put an inkable hand card face-down into the inkwell. Once per turn.
pub fn try_add_to_inkwell(player: &PlayerState, id: InstanceId) -> Result<PlayerState, Rejection> {
    if player.ink_committed {
        return Err(Rejection::InkAlreadyCommitted);
    }
    let card = player
        .zones
        .find(Zone::Hand, id)
        .ok_or(Rejection::NotInZone { card: id, zone: Zone::Hand })?;
    if !card.definition.inkable {
        return Err(Rejection::NotInkable(id));
    }

    let mut next = player.clone();
    next.zones
        .move_card(id, Zone::Hand, Zone::Inkwell, ZonePosition::Back, CardInstance::into_ink);
    next.ink_committed = true;
    Ok(next)
}

/// Silent form of [`try_add_to_inkwell`].
#[must_use]
pub fn add_to_inkwell(player: &PlayerState, id: InstanceId) -> PlayerState {
    try_add_to_inkwell(player, id).unwrap_or_else(|_| player.clone())
}

/// Ink a card from the active seat's hand.
pub fn try_ink_card(state: &GameState, id: InstanceId) -> Result<GameState, Rejection> {
    let inked = try_add_to_inkwell(state.active_player(), id)?;
    let mut next = state.clone();
    next.players[state.active] = inked;
    Ok(next)
}

/// Silent form of [`try_ink_card`].
#[must_use]
pub fn ink_card(state: &GameState, id: InstanceId) -> GameState {
    try_ink_card(state, id).unwrap_or_else(|_| state.clone())
}

/// Play a card from the active seat's hand onto its field.
///
/// The card arrives ready but dried. `target` is accepted for cards that
/// will need one, and otherwise ignored.
pub fn try_play_card(
    state: &GameState,
    id: InstanceId,
    _target: Option<InstanceId>,
    ink: InkPolicy,
) -> Result<GameState, Rejection> {
    let player = state.active_player();
    let card = player
        .zones
        .find(Zone::Hand, id)
        .ok_or(Rejection::NotInZone { card: id, zone: Zone::Hand })?;

    let cost = card.definition.cost;
    if ink == InkPolicy::Pay {
        let available = player.available_ink();
        if available < cost {
            return Err(Rejection::InsufficientInk { cost, available });
        }
    }

    let mut next = state.clone();
    let zones = &mut next.players[state.active].zones;
    zones.move_card(id, Zone::Hand, Zone::Field, ZonePosition::Back, CardInstance::into_play);

    if ink == InkPolicy::Pay {
        let mut remaining = cost;
        zones.update_all(Zone::Inkwell, |c| {
            if remaining > 0 && !c.exerted {
                c.exerted = true;
                remaining -= 1;
            }
        });
    }
    Ok(next)
}

/// Silent, free form of [`try_play_card`].
#[must_use]
pub fn play_card(state: &GameState, id: InstanceId, target: Option<InstanceId>) -> GameState {
    try_play_card(state, id, target, InkPolicy::Free).unwrap_or_else(|_| state.clone())
}

/// Exert a ready field card of the active seat to gain its lore.
pub fn try_quest_card(state: &GameState, id: InstanceId) -> Result<GameState, Rejection> {
    let card = active_field_card(state, id)?;
    check_ready(card)?;
    let lore = card.definition.lore_value();

    let mut next = state.clone();
    let player = &mut next.players[state.active];
    player.zones.update(Zone::Field, id, |c| c.exerted = true);
    player.lore = player.lore.saturating_add(lore);
    clear_selection(&mut next, &[id]);
    Ok(next)
}

/// Silent form of [`try_quest_card`].
#[must_use]
pub fn quest_card(state: &GameState, id: InstanceId) -> GameState {
    try_quest_card(state, id).unwrap_or_else(|_| state.clone())
}

/// Challenge an exerted opposing character with a ready one.
///
/// Each side takes damage equal to the other's strength. A card whose
/// damage reaches its willpower is banished to its owner's discard. The
/// attacker ends exerted if it survives.
pub fn try_challenge_card(
    state: &GameState,
    attacker: InstanceId,
    defender: InstanceId,
) -> Result<GameState, Rejection> {
    let attacking_seat = state.active;
    let defending_seat = attacking_seat.other();

    let attacker_card = active_field_card(state, attacker)?;
    check_ready(attacker_card)?;
    if attacker_card.definition.willpower.is_none() {
        return Err(Rejection::NotACharacter(attacker));
    }

    let defender_card = state
        .player(defending_seat)
        .zones
        .find(Zone::Field, defender)
        .ok_or(Rejection::NotOpposing(defender))?;
    if !defender_card.exerted {
        return Err(Rejection::DefenderReady(defender));
    }
    if defender_card.definition.willpower.is_none() {
        return Err(Rejection::NotACharacter(defender));
    }

    let attack = attacker_card.definition.strength_value();
    let counter = defender_card.definition.strength_value();

    let mut next = state.clone();
    next.players[attacking_seat].zones.update(Zone::Field, attacker, |c| {
        c.damage = c.damage.saturating_add(counter);
        c.exerted = true;
    });
    next.players[defending_seat]
        .zones
        .update(Zone::Field, defender, |c| c.damage = c.damage.saturating_add(attack));

    let mut banished: SmallVec<[(Seat, InstanceId); 2]> = SmallVec::new();
    for (seat, id) in [(attacking_seat, attacker), (defending_seat, defender)] {
        if next.players[seat]
            .zones
            .find(Zone::Field, id)
            .is_some_and(CardInstance::is_banished)
        {
            banished.push((seat, id));
        }
    }
    for (seat, id) in banished {
        banish(&mut next, seat, id);
    }

    clear_selection(&mut next, &[attacker, defender]);
    Ok(next)
}

/// Silent form of [`try_challenge_card`].
#[must_use]
pub fn challenge_card(state: &GameState, attacker: InstanceId, defender: InstanceId) -> GameState {
    try_challenge_card(state, attacker, defender).unwrap_or_else(|_| state.clone())
}

/// Flip the exerted flag of a field card on either side of the table.
pub fn try_toggle_exert(state: &GameState, id: InstanceId) -> Result<GameState, Rejection> {
    let seat = field_seat(state, id)?;
    let mut next = state.clone();
    next.players[seat]
        .zones
        .update(Zone::Field, id, |c| c.exerted = !c.exerted);
    Ok(next)
}

/// Silent form of [`try_toggle_exert`].
#[must_use]
pub fn toggle_exert(state: &GameState, id: InstanceId) -> GameState {
    try_toggle_exert(state, id).unwrap_or_else(|_| state.clone())
}

/// Set or clear the click-to-select target. Only field cards can be selected.
pub fn try_select_card(state: &GameState, id: Option<InstanceId>) -> Result<GameState, Rejection> {
    if let Some(id) = id {
        field_seat(state, id)?;
    }
    let mut next = state.clone();
    next.selected = id;
    Ok(next)
}

/// Silent form of [`try_select_card`].
#[must_use]
pub fn select_card(state: &GameState, id: Option<InstanceId>) -> GameState {
    try_select_card(state, id).unwrap_or_else(|_| state.clone())
}

fn active_field_card(state: &GameState, id: InstanceId) -> Result<&CardInstance, Rejection> {
    state
        .active_player()
        .zones
        .find(Zone::Field, id)
        .ok_or(Rejection::NotInZone { card: id, zone: Zone::Field })
}

fn check_ready(card: &CardInstance) -> Result<(), Rejection> {
    if card.exerted {
        return Err(Rejection::Exerted(card.instance_id));
    }
    if card.dried {
        return Err(Rejection::Dried(card.instance_id));
    }
    Ok(())
}

fn field_seat(state: &GameState, id: InstanceId) -> Result<Seat, Rejection> {
    match state.locate(id) {
        Some((seat, Zone::Field)) => Ok(seat),
        _ => Err(Rejection::NotOnField(id)),
    }
}

fn banish(state: &mut GameState, seat: Seat, id: InstanceId) {
    let Some(card) = state.players[seat].zones.take(Zone::Field, id) else {
        return;
    };
    let owner = card.owner;
    state.players[owner]
        .zones
        .place(Zone::Discard, card.into_discard(), ZonePosition::Back);
}

fn clear_selection(state: &mut GameState, involved: &[InstanceId]) {
    if state.selected.is_some_and(|s| involved.contains(&s)) {
        state.selected = None;
    }
}
