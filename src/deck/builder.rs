//! Deck construction and shuffling.

use std::sync::Arc;

use im::Vector;

use crate::cards::{CardDefinition, CardInstance};
use crate::core::entity::IdAllocator;
use crate::core::player::Seat;
use crate::core::rng::RandomSource;

/// Build a deck of `size` fresh instances for `owner`.
///
/// Each slot picks a definition uniformly from `pool`, with replacement, so
/// a deck may hold any number of copies of a card. Every instance gets a new
/// id from `ids` and starts ready, face-up and dried. An empty pool gives an
/// empty deck.
///
/// ```
/// use deckforge::cards::CardRegistry;
/// use deckforge::core::{GameRng, IdAllocator, Seat};
/// use deckforge::deck::create_deck;
///
/// let registry = CardRegistry::starter();
/// let mut ids = IdAllocator::new();
/// let deck = create_deck(registry.pool(), 60, Seat::Player, &mut ids, &mut GameRng::new(7));
///
/// assert_eq!(deck.len(), 60);
/// assert!(deck.iter().all(|c| c.dried && !c.exerted && !c.face_down));
/// ```
pub fn create_deck<R: RandomSource>(
    pool: &[Arc<CardDefinition>],
    size: usize,
    owner: Seat,
    ids: &mut IdAllocator,
    rng: &mut R,
) -> Vector<CardInstance> {
    if pool.is_empty() {
        return Vector::new();
    }

    (0..size)
        .map(|_| {
            let definition = Arc::clone(&pool[rng.gen_index(pool.len())]);
            CardInstance::new(ids.alloc(), definition, owner)
        })
        .collect()
}

/// Return a uniformly shuffled copy of `deck`. The input is untouched and
/// the multiset of instances is preserved exactly.
pub fn shuffle_deck<R: RandomSource>(deck: &Vector<CardInstance>, rng: &mut R) -> Vector<CardInstance> {
    let mut cards: Vec<CardInstance> = deck.iter().cloned().collect();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardRegistry, CardType};
    use crate::core::entity::InstanceId;
    use crate::core::rng::{GameRng, ScriptedRng};

    fn pool(n: u32) -> Vec<Arc<CardDefinition>> {
        (1..=n)
            .map(|i| Arc::new(CardDefinition::new(CardId::new(1, i), format!("#{i}"), CardType::Character)))
            .collect()
    }

    #[test]
    fn test_create_deck_size_and_flags() {
        let registry = CardRegistry::starter();
        let mut ids = IdAllocator::new();

        let deck = create_deck(registry.pool(), 60, Seat::Opponent, &mut ids, &mut GameRng::new(1));

        assert_eq!(deck.len(), 60);
        assert_eq!(ids.allocated(), 60);
        for card in deck.iter() {
            assert!(card.dried);
            assert!(!card.exerted);
            assert!(!card.face_down);
            assert_eq!(card.owner, Seat::Opponent);
        }
    }

    #[test]
    fn test_create_deck_ids_unique_and_fresh() {
        let mut ids = IdAllocator::starting_at(10);

        let deck = create_deck(&pool(3), 5, Seat::Player, &mut ids, &mut GameRng::new(1));

        let got: Vec<_> = deck.iter().map(|c| c.instance_id).collect();
        let want: Vec<_> = (10..15).map(InstanceId).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_create_deck_scripted_picks() {
        let mut ids = IdAllocator::new();
        let mut rng = ScriptedRng::new(vec![2, 0, 2, 1]);

        let deck = create_deck(&pool(3), 4, Seat::Player, &mut ids, &mut rng);

        let numbers: Vec<_> = deck.iter().map(|c| c.definition.id.number).collect();
        assert_eq!(numbers, vec![3, 1, 3, 2]);
    }

    #[test]
    fn test_create_deck_allows_duplicates() {
        let mut ids = IdAllocator::new();
        let deck = create_deck(&pool(1), 10, Seat::Player, &mut ids, &mut GameRng::new(3));

        assert_eq!(deck.len(), 10);
        assert!(deck.iter().all(|c| c.definition.id == CardId::new(1, 1)));
    }

    #[test]
    fn test_create_deck_empty_pool() {
        let mut ids = IdAllocator::new();
        let deck = create_deck(&[], 60, Seat::Player, &mut ids, &mut GameRng::new(3));

        assert!(deck.is_empty());
        assert_eq!(ids.allocated(), 0);
    }

    #[test]
    fn test_shuffle_deck_does_not_mutate_input() {
        let mut ids = IdAllocator::new();
        let deck = create_deck(&pool(4), 20, Seat::Player, &mut ids, &mut GameRng::new(5));
        let before = deck.clone();

        let shuffled = shuffle_deck(&deck, &mut GameRng::new(9));

        assert_eq!(deck, before);
        assert_eq!(shuffled.len(), deck.len());
        assert_ne!(shuffled, deck);
    }

    #[test]
    fn test_shuffle_deck_scripted_order() {
        let mut ids = IdAllocator::new();
        let deck = create_deck(&pool(1), 4, Seat::Player, &mut ids, &mut ScriptedRng::default());

        let shuffled = shuffle_deck(&deck, &mut ScriptedRng::new(vec![0]));

        let order: Vec<_> = shuffled.iter().map(|c| c.instance_id.0).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
