//! Shared helpers for the CLI commands.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;
use yumdeck_core::deck::{DeckEngine, ThreadRngShuffler};
use yumdeck_core::recipe::{Difficulty, Recipe, builtin_catalog};
use yumdeck_core::storage::KeyValueStore;
use yumdeck_infrastructure::FileKeyValueStore;

/// Opens the default file-backed store.
pub fn open_store() -> Result<Arc<dyn KeyValueStore>> {
    Ok(Arc::new(FileKeyValueStore::open_default()?))
}

/// Starts a deck session over the builtin catalog and the default store.
pub fn open_engine() -> Result<DeckEngine> {
    Ok(DeckEngine::start_session(
        builtin_catalog().clone(),
        open_store()?,
        Box::new(ThreadRngShuffler),
    ))
}

/// Prompts on stdout and reads one trimmed line from stdin.
pub fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Renders a recipe card to the terminal.
pub fn print_card(recipe: &Recipe) {
    let difficulty = match recipe.difficulty {
        Difficulty::Easy => recipe.difficulty.to_string().green(),
        Difficulty::Medium => recipe.difficulty.to_string().yellow(),
        Difficulty::Hard => recipe.difficulty.to_string().red(),
    };
    println!();
    println!("{} {}", recipe.emoji, recipe.name.bold());
    println!(
        "{} · {} min · {}",
        recipe.cuisine.truecolor(255, 107, 53),
        recipe.cook_time,
        difficulty
    );
    println!("{}", recipe.description.dimmed());
    if !recipe.tags.is_empty() {
        println!("{}", recipe.tags.join(" · ").cyan());
    }
    println!(
        "{} cal · {} serving{} · {}",
        recipe.calories,
        recipe.servings,
        if recipe.servings > 1 { "s" } else { "" },
        recipe.category
    );
}
