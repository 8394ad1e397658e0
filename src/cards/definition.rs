//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable printed properties of a card: its
//! cost, whether it can be inked, its stats and text. Definitions are loaded
//! once and shared (behind `Arc`) by every instance that references them.
//!
//! Instance-specific data (exerted, dried, damage) lives in `CardInstance`.
//!
//! The serde layout matches the card loader's record format
//! (`Set_Num`, `Card_Num`, `Name`, ...).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::attributes::{CardType, Rarity};

/// Printed identity of a card: set number plus collector number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId {
    #[serde(rename = "Set_Num")]
    pub set: u32,
    #[serde(rename = "Card_Num")]
    pub number: u32,
}

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(set: u32, number: u32) -> Self {
        Self { set, number }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:03}", self.set, self.number)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{CardDefinition, CardId, CardType};
///
/// let stitch = CardDefinition::new(CardId::new(1, 3), "Stitch - Rock Star", CardType::Character)
///     .with_cost(6)
///     .with_inkable(true)
///     .with_stats(3, 5, 3);
///
/// assert_eq!(stitch.lore_value(), 3);
/// assert!(stitch.inkable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    #[serde(flatten)]
    pub id: CardId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Cost")]
    pub cost: u32,

    #[serde(rename = "Inkable")]
    pub inkable: bool,

    #[serde(rename = "Type")]
    pub card_type: CardType,

    /// Classifications such as Storyborn or Hero.
    #[serde(
        rename = "Class",
        default,
        deserialize_with = "split_classifications",
        serialize_with = "join_classifications"
    )]
    pub classifications: Vec<String>,

    #[serde(rename = "Strength", default)]
    pub strength: Option<u32>,

    #[serde(rename = "Willpower", default)]
    pub willpower: Option<u32>,

    #[serde(rename = "Lore", default)]
    pub lore: Option<u32>,

    #[serde(rename = "Rarity")]
    pub rarity: Rarity,

    /// Ability text. Descriptive only; the engine never executes it.
    #[serde(rename = "Abilities", default)]
    pub abilities: Vec<String>,

    #[serde(rename = "Flavor_Text", default)]
    pub flavor_text: Option<String>,

    /// Art reference, opaque to the engine.
    #[serde(rename = "Image", default)]
    pub image: String,
}

impl CardDefinition {
    /// Create a definition with zero cost, not inkable, no stats.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            cost: 0,
            inkable: false,
            card_type,
            classifications: Vec::new(),
            strength: None,
            willpower: None,
            lore: None,
            rarity: Rarity::Common,
            abilities: Vec::new(),
            flavor_text: None,
            image: String::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_inkable(mut self, inkable: bool) -> Self {
        self.inkable = inkable;
        self
    }

    /// Set strength, willpower and lore together.
    #[must_use]
    pub fn with_stats(mut self, strength: u32, willpower: u32, lore: u32) -> Self {
        self.strength = Some(strength);
        self.willpower = Some(willpower);
        self.lore = Some(lore);
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_classification(mut self, class: impl Into<String>) -> Self {
        self.classifications.push(class.into());
        self
    }

    #[must_use]
    pub fn with_ability(mut self, text: impl Into<String>) -> Self {
        self.abilities.push(text.into());
        self
    }

    #[must_use]
    pub fn with_flavor_text(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Lore gained when questing (0 if the card has none).
    #[must_use]
    pub fn lore_value(&self) -> u32 {
        self.lore.unwrap_or(0)
    }

    /// Damage dealt in a challenge (0 if the card has none).
    #[must_use]
    pub fn strength_value(&self) -> u32 {
        self.strength.unwrap_or(0)
    }
}

fn split_classifications<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default())
}

#[allow(clippy::ptr_arg)]
fn join_classifications<S>(classes: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if classes.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(&classes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_record() -> &'static str {
        r#"{
            "Set_Num": 1,
            "Card_Num": 42,
            "Name": "Mickey Mouse - Brave Little Tailor",
            "Cost": 8,
            "Inkable": false,
            "Type": "Character",
            "Class": "Storyborn, Hero, Prince",
            "Strength": 5,
            "Willpower": 5,
            "Lore": 4,
            "Rarity": "Legendary",
            "Image": "https://example.invalid/1-42.png",
            "Abilities": ["Evasive"]
        }"#
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(2, 7)), "2-007");
    }

    #[test]
    fn test_builder() {
        let card = CardDefinition::new(CardId::new(1, 1), "Test", CardType::Character)
            .with_cost(3)
            .with_inkable(true)
            .with_stats(2, 4, 1)
            .with_classification("Storyborn");

        assert_eq!(card.cost, 3);
        assert_eq!(card.strength, Some(2));
        assert_eq!(card.willpower, Some(4));
        assert_eq!(card.lore_value(), 1);
        assert_eq!(card.classifications, vec!["Storyborn".to_string()]);
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let card = CardDefinition::new(CardId::new(1, 2), "Dinglehopper", CardType::Item);

        assert_eq!(card.lore_value(), 0);
        assert_eq!(card.strength_value(), 0);
        assert_eq!(card.willpower, None);
    }

    #[test]
    fn test_parse_loader_record() {
        let card: CardDefinition = serde_json::from_str(loader_record()).unwrap();

        assert_eq!(card.id, CardId::new(1, 42));
        assert_eq!(card.cost, 8);
        assert!(!card.inkable);
        assert_eq!(card.card_type, CardType::Character);
        assert_eq!(card.classifications, vec!["Storyborn", "Hero", "Prince"]);
        assert_eq!(card.lore, Some(4));
        assert_eq!(card.rarity, Rarity::Legendary);
        assert_eq!(card.flavor_text, None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let card: CardDefinition = serde_json::from_str(loader_record()).unwrap();

        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, back);
    }
}
