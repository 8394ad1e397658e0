//! Bundled starter card set.
//!
//! A small local pool so a game can start before (or without) any external
//! card library. Stats follow the usual curve: cheap characters quest for
//! little, expensive ones hit hard.

use super::attributes::{CardType, Rarity};
use super::definition::{CardDefinition, CardId};

const STARTER_SET: u32 = 1;

/// Definitions in the starter set, in collector-number order.
#[must_use]
pub fn starter_cards() -> Vec<CardDefinition> {
    let id = |number| CardId::new(STARTER_SET, number);

    vec![
        CardDefinition::new(id(1), "Lantern Keeper - Night Watch", CardType::Character)
            .with_cost(1)
            .with_inkable(true)
            .with_stats(1, 2, 1)
            .with_classification("Storyborn")
            .with_flavor_text("Someone has to stay awake."),
        CardDefinition::new(id(2), "Reef Sprite - Tide Dancer", CardType::Character)
            .with_cost(2)
            .with_inkable(true)
            .with_stats(2, 2, 1)
            .with_classification("Dreamborn"),
        CardDefinition::new(id(3), "Hollow Knight - Oathbound", CardType::Character)
            .with_cost(3)
            .with_inkable(true)
            .with_stats(3, 3, 1)
            .with_classification("Storyborn")
            .with_classification("Hero")
            .with_rarity(Rarity::Uncommon),
        CardDefinition::new(id(4), "Willow Sage - Keeper of Tales", CardType::Character)
            .with_cost(3)
            .with_inkable(false)
            .with_stats(1, 4, 2)
            .with_classification("Storyborn")
            .with_classification("Mentor")
            .with_rarity(Rarity::Rare),
        CardDefinition::new(id(5), "Brass Golem - Foundry Guard", CardType::Character)
            .with_cost(4)
            .with_inkable(true)
            .with_stats(4, 5, 1)
            .with_classification("Dreamborn"),
        CardDefinition::new(id(6), "Captain Marrow - Sky Pirate", CardType::Character)
            .with_cost(5)
            .with_inkable(false)
            .with_stats(4, 4, 2)
            .with_classification("Storyborn")
            .with_classification("Villain")
            .with_classification("Pirate")
            .with_rarity(Rarity::SuperRare)
            .with_ability("Evasive (Only characters with Evasive can challenge this character.)"),
        CardDefinition::new(id(7), "Starlit Queen - Crown of Dusk", CardType::Character)
            .with_cost(7)
            .with_inkable(true)
            .with_stats(5, 6, 3)
            .with_classification("Floodborn")
            .with_classification("Queen")
            .with_rarity(Rarity::Legendary),
        CardDefinition::new(id(8), "Puddle Imp - Mischief Maker", CardType::Character)
            .with_cost(1)
            .with_inkable(false)
            .with_stats(2, 1, 1)
            .with_classification("Dreamborn"),
        CardDefinition::new(id(9), "Ember Fox - Trailblazer", CardType::Character)
            .with_cost(2)
            .with_inkable(true)
            .with_stats(1, 3, 2)
            .with_classification("Storyborn")
            .with_rarity(Rarity::Uncommon),
        CardDefinition::new(id(10), "Sudden Squall", CardType::Action)
            .with_cost(2)
            .with_inkable(true)
            .with_ability("Deal 2 damage to chosen character.")
            .with_rarity(Rarity::Uncommon),
        CardDefinition::new(id(11), "Lullaby of the Deep", CardType::Song)
            .with_cost(3)
            .with_inkable(true)
            .with_ability("Exert chosen opposing character.")
            .with_flavor_text("Sleep now, the tide will wait."),
        CardDefinition::new(id(12), "Wayfinder's Compass", CardType::Item)
            .with_cost(1)
            .with_inkable(false)
            .with_ability("Banish this item: draw a card.")
            .with_rarity(Rarity::Rare),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_ids_are_unique() {
        let cards = starter_cards();
        let mut ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_characters_have_stats() {
        for card in starter_cards().iter().filter(|c| c.card_type.is_character()) {
            assert!(card.willpower.is_some(), "{} has no willpower", card.name);
            assert!(card.lore.is_some(), "{} has no lore", card.name);
        }
    }
}
