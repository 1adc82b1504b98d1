//! Clears swipe history.

use super::utils::open_engine;
use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let mut deck = open_engine()?;
    deck.reset_session()?;

    println!(
        "🔄 Deck reshuffled: {} recipes ready to swipe.",
        deck.queue_len()
    );
    println!(
        "{}",
        format!("{} saved recipes kept.", deck.favorite_ids().len()).dimmed()
    );
    Ok(())
}
