//! Recipe domain model.
//!
//! A `Recipe` is an immutable record supplied by the catalog at startup.
//! The deck engine never mutates recipes; it only tracks their identifiers.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Cooking difficulty of a recipe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single recipe record.
///
/// Identifiers are unique and stable within a catalog; everything else is
/// display data for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique, stable identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cuisine label (e.g., "Japanese", "Italian").
    pub cuisine: String,
    /// Cook time in minutes.
    pub cook_time: u32,
    /// Cooking difficulty.
    pub difficulty: Difficulty,
    /// Short description for the card body.
    pub description: String,
    /// Free-form tags (e.g., "vegan", "comfort food").
    pub tags: Vec<String>,
    /// Calories per serving.
    pub calories: u32,
    /// Number of servings produced.
    pub servings: u32,
    /// Meal category (e.g., "Dinner", "Dessert").
    pub category: String,
    /// One-glyph display hint shown on the card.
    pub emoji: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("Medium").unwrap(), Difficulty::Medium);
        assert!(Difficulty::from_str("Impossible").is_err());
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: "udon".to_string(),
            name: "Udon".to_string(),
            cuisine: "Japanese".to_string(),
            cook_time: 20,
            difficulty: Difficulty::Easy,
            description: "Thick noodles in broth".to_string(),
            tags: vec!["noodles".to_string()],
            calories: 450,
            servings: 2,
            category: "Dinner".to_string(),
            emoji: "🍜".to_string(),
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["cookTime"], 20);
        assert_eq!(json["difficulty"], "Easy");
    }
}
