//! Gameplay scenario tests.
//!
//! These tests play short sequences through the public API:
//! - Inking, playing, drying and questing across turns
//! - Challenges and banishment
//! - The lore win and how the store and engine treat it

use std::sync::Arc;

use deckforge::cards::{CardDefinition, CardId, CardInstance, CardType};
use deckforge::core::{Action, GameConfig, GameState, InstanceId, Seat};
use deckforge::history::GameStore;
use deckforge::rules::{
    add_to_inkwell, challenge_card, end_turn, quest_card, winner, Engine, GameResult, Rejection,
    RulesEngine,
};
use deckforge::zones::{Zone, ZonePosition};

fn character(number: u32, strength: u32, willpower: u32, lore: u32) -> Arc<CardDefinition> {
    Arc::new(
        CardDefinition::new(CardId::new(1, number), format!("Character {number}"), CardType::Character)
            .with_cost(2)
            .with_inkable(true)
            .with_stats(strength, willpower, lore),
    )
}

fn place(state: &mut GameState, seat: Seat, zone: Zone, card: CardInstance) {
    state.players[seat].zones.place(zone, card, ZonePosition::Back);
}

fn ready(id: u32, def: &Arc<CardDefinition>, owner: Seat) -> CardInstance {
    let mut card = CardInstance::new(InstanceId(id), Arc::clone(def), owner);
    card.dried = false;
    card
}

/// Test a quest on a ready, dry lore-2 character.
#[test]
fn test_quest_gains_lore() {
    let def = character(1, 1, 3, 2);
    let mut state = GameState::new();
    place(&mut state, Seat::Player, Zone::Field, ready(1, &def, Seat::Player));

    let next = quest_card(&state, InstanceId(1));

    assert_eq!(next.player(Seat::Player).lore, 2);
    assert!(next.card(InstanceId(1)).unwrap().exerted);
}

/// Test a second ink in one turn leaves the inkwell alone.
#[test]
fn test_double_ink_is_noop() {
    let def = character(1, 1, 1, 1);
    let mut state = GameState::new();
    place(&mut state, Seat::Player, Zone::Hand, CardInstance::new(InstanceId(1), Arc::clone(&def), Seat::Player));
    place(&mut state, Seat::Player, Zone::Hand, CardInstance::new(InstanceId(2), def, Seat::Player));

    let once = add_to_inkwell(state.player(Seat::Player), InstanceId(1));
    let twice = add_to_inkwell(&once, InstanceId(2));

    assert_eq!(twice.inkwell().len(), 1);
    assert!(twice.ink_committed);
    assert_eq!(twice.hand().len(), 1);
}

/// Test challenging a ready defender changes nothing.
#[test]
fn test_challenge_ready_defender_is_noop() {
    let def = character(1, 5, 5, 1);
    let mut state = GameState::new();
    place(&mut state, Seat::Player, Zone::Field, ready(1, &def, Seat::Player));
    place(&mut state, Seat::Opponent, Zone::Field, ready(2, &def, Seat::Opponent));

    assert_eq!(challenge_card(&state, InstanceId(1), InstanceId(2)), state);
}

/// Test a played card dries over a full round, then can quest.
#[test]
fn test_played_card_dries_next_turn() {
    let def = character(1, 1, 3, 1);
    let mut state = GameState::new();
    place(&mut state, Seat::Player, Zone::Hand, CardInstance::new(InstanceId(1), def, Seat::Player));
    let engine = Engine::default();

    let state = engine
        .apply_action(&state, &Action::Play { card: InstanceId(1), target: None })
        .unwrap();
    assert_eq!(
        engine.apply_action(&state, &Action::Quest { card: InstanceId(1) }),
        Err(Rejection::Dried(InstanceId(1)))
    );

    // Opponent's turn, then back to the player.
    let state = end_turn(&end_turn(&state));
    assert_eq!(state.active, Seat::Player);
    let state = engine
        .apply_action(&state, &Action::Quest { card: InstanceId(1) })
        .unwrap();
    assert_eq!(state.player(Seat::Player).lore, 1);
    assert_eq!(state.action_log.len(), 2);
}

/// Test a challenge where both characters are banished.
#[test]
fn test_mutual_banish() {
    let def = character(1, 3, 3, 1);
    let mut state = GameState::new();
    place(&mut state, Seat::Player, Zone::Field, ready(1, &def, Seat::Player));
    let mut defender = ready(2, &def, Seat::Opponent);
    defender.exerted = true;
    place(&mut state, Seat::Opponent, Zone::Field, defender);

    let next = challenge_card(&state, InstanceId(1), InstanceId(2));

    assert!(next.player(Seat::Player).field().is_empty());
    assert!(next.player(Seat::Opponent).field().is_empty());
    assert_eq!(next.player(Seat::Player).discard().len(), 1);
    assert_eq!(next.player(Seat::Opponent).discard().len(), 1);
    assert_eq!(next.total_cards(), state.total_cards());
}

/// Test the lore win through the engine: it keeps accepting actions.
#[test]
fn test_engine_accepts_actions_after_win() {
    let def = character(1, 1, 5, 20);
    let mut state = GameState::new();
    place(&mut state, Seat::Player, Zone::Field, ready(1, &def, Seat::Player));
    place(&mut state, Seat::Player, Zone::Hand, CardInstance::new(InstanceId(2), def, Seat::Player));
    let engine = Engine::default();

    let won = engine
        .apply_action(&state, &Action::Quest { card: InstanceId(1) })
        .unwrap();

    assert_eq!(won.player(Seat::Player).lore, 20);
    assert_eq!(winner(&won, 20), Some(GameResult::Winner(Seat::Player)));
    assert!(engine
        .apply_action(&won, &Action::Play { card: InstanceId(2), target: None })
        .is_ok());
}

/// Test the store refuses every action once someone has won.
#[test]
fn test_store_blocks_after_win() {
    let config = GameConfig::default().with_lore_to_win(1);
    let (mut store, card) = (0..64)
        .find_map(|seed| {
            let store = GameStore::new(config.clone(), seed).unwrap();
            let card = store
                .state()
                .active_player()
                .hand()
                .iter()
                .find(|c| c.definition.lore_value() > 0)
                .map(|c| c.instance_id)?;
            Some((store, card))
        })
        .unwrap();

    store.play(card, None).unwrap();
    store.end_turn().unwrap();
    store.end_turn().unwrap();
    store.quest(card).unwrap();
    assert!(store.is_game_over());
    assert!(store.winner().unwrap().is_winner(Seat::Player));

    let history = store.history().len();
    assert_eq!(store.end_turn(), Err(Rejection::GameOver));
    assert_eq!(store.history().len(), history);
    assert!(store.legal_actions().is_empty());

    // Undo is still allowed and reopens the game.
    assert!(store.undo());
    assert!(!store.is_game_over());
}
