//! Lists saved (favorited) recipes.

use super::utils::open_engine;
use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let deck = open_engine()?;
    let favorites = deck.favorites();

    if favorites.is_empty() {
        println!("No saved recipes yet.");
        println!("{}", "Swipe right on something you love!".dimmed());
        return Ok(());
    }

    println!("{} ({})", "Saved Recipes".bold(), favorites.len());
    for recipe in favorites {
        println!(
            "  {} {} {} · {} min",
            recipe.emoji,
            recipe.name.bold(),
            recipe.cuisine.dimmed(),
            recipe.cook_time
        );
    }
    Ok(())
}
