//! Card classification attributes.
//!
//! `CardType` and `Rarity` are closed sets in practice, but card libraries
//! grow; unknown labels survive as `Other` instead of failing the load.
//! Both serialize as the plain label string the card loader uses.

use serde::{Deserialize, Serialize};

/// What kind of card this is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardType {
    Character,
    Action,
    /// An action that can also be sung.
    Song,
    Item,
    Location,
    Other(String),
}

impl CardType {
    /// Characters are the only cards with strength/willpower combat stats.
    #[must_use]
    pub fn is_character(&self) -> bool {
        matches!(self, CardType::Character)
    }
}

impl From<String> for CardType {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "character" => CardType::Character,
            "action" => CardType::Action,
            "song" | "action - song" => CardType::Song,
            "item" => CardType::Item,
            "location" => CardType::Location,
            _ => CardType::Other(label),
        }
    }
}

impl From<&str> for CardType {
    fn from(label: &str) -> Self {
        CardType::from(label.to_string())
    }
}

impl From<CardType> for String {
    fn from(card_type: CardType) -> Self {
        match card_type {
            CardType::Character => "Character".to_string(),
            CardType::Action => "Action".to_string(),
            CardType::Song => "Action - Song".to_string(),
            CardType::Item => "Item".to_string(),
            CardType::Location => "Location".to_string(),
            CardType::Other(label) => label,
        }
    }
}

/// Print rarity. Cosmetic: no rule reads it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    SuperRare,
    Legendary,
    Enchanted,
    Promo,
    Other(String),
}

impl From<String> for Rarity {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "super rare" | "super_rare" => Rarity::SuperRare,
            "legendary" => Rarity::Legendary,
            "enchanted" => Rarity::Enchanted,
            "promo" => Rarity::Promo,
            _ => Rarity::Other(label),
        }
    }
}

impl From<&str> for Rarity {
    fn from(label: &str) -> Self {
        Rarity::from(label.to_string())
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Common => "Common".to_string(),
            Rarity::Uncommon => "Uncommon".to_string(),
            Rarity::Rare => "Rare".to_string(),
            Rarity::SuperRare => "Super Rare".to_string(),
            Rarity::Legendary => "Legendary".to_string(),
            Rarity::Enchanted => "Enchanted".to_string(),
            Rarity::Promo => "Promo".to_string(),
            Rarity::Other(label) => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_labels() {
        assert_eq!(CardType::from("Character"), CardType::Character);
        assert_eq!(CardType::from("character"), CardType::Character);
        assert_eq!(CardType::from("Action - Song"), CardType::Song);
        assert_eq!(CardType::from("Glimmer"), CardType::Other("Glimmer".to_string()));
    }

    #[test]
    fn test_is_character() {
        assert!(CardType::Character.is_character());
        assert!(!CardType::Item.is_character());
    }

    #[test]
    fn test_rarity_labels() {
        assert_eq!(Rarity::from("Super Rare"), Rarity::SuperRare);
        assert_eq!(Rarity::from("Legendary"), Rarity::Legendary);
        assert_eq!(String::from(Rarity::SuperRare), "Super Rare");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&CardType::Location).unwrap();
        assert_eq!(json, "\"Location\"");

        let parsed: Rarity = serde_json::from_str("\"Enchanted\"").unwrap();
        assert_eq!(parsed, Rarity::Enchanted);
    }
}
