//! Shows swipe counters.

use super::utils::open_engine;
use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let deck = open_engine()?;
    let counts = deck.counts();

    println!("⬅️  {} skipped", counts.skipped);
    println!("❤️  {} saved", counts.favorited.to_string().green());
    println!(
        "{} of {} left in the current deck",
        counts.remaining.to_string().bold(),
        deck.queue_len()
    );
    Ok(())
}
