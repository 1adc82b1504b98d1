//! Builtin recipe catalog shipped with the core.
//!
//! This is the fixed recipe list the deck runs over when no other catalog is
//! supplied. It is loaded once at startup and cached for the lifetime of the
//! application; it is never modified.

use super::catalog::Catalog;
use super::model::{Difficulty, Recipe};
use std::sync::OnceLock;

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: &str,
    name: &str,
    cuisine: &str,
    cook_time: u32,
    difficulty: Difficulty,
    description: &str,
    tags: &[&str],
    calories: u32,
    servings: u32,
    category: &str,
    emoji: &str,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        cook_time,
        difficulty,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        calories,
        servings,
        category: category.to_string(),
        emoji: emoji.to_string(),
    }
}

/// Static storage for the builtin catalog (initialized once).
static BUILTIN_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Returns the builtin recipe catalog.
///
/// The catalog is built on first access and cached for subsequent calls.
pub fn builtin_catalog() -> &'static Catalog {
    BUILTIN_CATALOG.get_or_init(|| {
        let recipes = vec![
            recipe(
                "spicy-miso-ramen",
                "Spicy Miso Ramen",
                "Japanese",
                35,
                Difficulty::Medium,
                "Rich miso broth with chili oil, soft egg, and charred corn over springy noodles.",
                &["noodles", "spicy", "comfort food"],
                620,
                2,
                "Dinner",
                "🍜",
            ),
            recipe(
                "one-pan-lemon-chicken",
                "One-Pan Lemon Chicken",
                "Mediterranean",
                40,
                Difficulty::Easy,
                "Crispy chicken thighs roasted with lemon, garlic, and baby potatoes in one pan.",
                &["one-pan", "high protein"],
                540,
                4,
                "Dinner",
                "🍗",
            ),
            recipe(
                "midnight-carbonara",
                "Midnight Carbonara",
                "Italian",
                20,
                Difficulty::Medium,
                "Silky egg-and-pecorino sauce over spaghetti with crisp guanciale. No cream, ever.",
                &["pasta", "quick", "comfort food"],
                700,
                2,
                "Dinner",
                "🍝",
            ),
            recipe(
                "rainbow-poke-bowl",
                "Rainbow Poke Bowl",
                "Hawaiian",
                15,
                Difficulty::Easy,
                "Marinated ahi tuna with avocado, edamame, and pickled ginger over sushi rice.",
                &["no-cook", "fresh", "high protein"],
                480,
                1,
                "Lunch",
                "🥗",
            ),
            recipe(
                "smoky-shakshuka",
                "Smoky Shakshuka",
                "Middle Eastern",
                25,
                Difficulty::Easy,
                "Eggs poached in a smoky tomato-pepper sauce, finished with feta and herbs.",
                &["vegetarian", "one-pan", "brunch"],
                390,
                2,
                "Breakfast",
                "🍳",
            ),
            recipe(
                "crispy-tofu-banh-mi",
                "Crispy Tofu Banh Mi",
                "Vietnamese",
                30,
                Difficulty::Medium,
                "Lemongrass tofu, quick-pickled carrots, and sriracha mayo on a crackly baguette.",
                &["vegan option", "sandwich"],
                520,
                2,
                "Lunch",
                "🥖",
            ),
            recipe(
                "birria-tacos",
                "Birria Tacos",
                "Mexican",
                180,
                Difficulty::Hard,
                "Slow-braised beef in adobo, folded into tortillas and seared in consommé fat.",
                &["slow cook", "weekend project", "spicy"],
                760,
                6,
                "Dinner",
                "🌮",
            ),
            recipe(
                "coconut-chickpea-curry",
                "Coconut Chickpea Curry",
                "Indian",
                30,
                Difficulty::Easy,
                "Creamy coconut curry with chickpeas, spinach, and warming garam masala.",
                &["vegan", "one-pot", "pantry staples"],
                450,
                4,
                "Dinner",
                "🍛",
            ),
            recipe(
                "korean-corn-cheese",
                "Korean Corn Cheese",
                "Korean",
                15,
                Difficulty::Easy,
                "Sweet corn baked under bubbling mozzarella with a kick of gochugaru butter.",
                &["side dish", "cheesy", "quick"],
                340,
                3,
                "Appetizer",
                "🌽",
            ),
            recipe(
                "french-onion-gnocchi",
                "French Onion Gnocchi",
                "French",
                45,
                Difficulty::Medium,
                "Pillowy gnocchi in deeply caramelized onion broth under a gruyère crust.",
                &["comfort food", "vegetarian"],
                610,
                3,
                "Dinner",
                "🧅",
            ),
            recipe(
                "miso-banana-bread",
                "Miso Banana Bread",
                "Fusion",
                70,
                Difficulty::Medium,
                "Classic banana bread with a savory miso edge and a dark caramelized crust.",
                &["baking", "sweet-savory"],
                310,
                8,
                "Dessert",
                "🍌",
            ),
            recipe(
                "watermelon-feta-salad",
                "Watermelon Feta Salad",
                "Greek",
                10,
                Difficulty::Easy,
                "Cold watermelon, salty feta, mint, and a lime-honey drizzle. Summer in a bowl.",
                &["no-cook", "fresh", "5 ingredients"],
                220,
                4,
                "Salad",
                "🍉",
            ),
        ];
        // Identifiers above are unique by construction.
        Catalog::new(recipes).expect("builtin catalog must have unique recipe ids")
    })
}
