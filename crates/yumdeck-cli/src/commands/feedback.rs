//! Feedback widget: ask -> comment -> done.

use super::utils::{open_store, prompt};
use anyhow::Result;
use colored::Colorize;
use yumdeck_core::feedback::{load_feedback, save_feedback};

pub fn run() -> Result<()> {
    let store = open_store()?;
    let mut record = load_feedback(store.as_ref());

    if record.submitted {
        println!("{} people found this helpful", record.helpful);
        println!("{}", "Thanks, your feedback is already in.".dimmed());
        return Ok(());
    }

    let answer = prompt("Was this tool helpful? [y/n] > ")?;
    record.vote(matches!(answer.to_lowercase().as_str(), "y" | "yes"));

    let comment = prompt("Any feedback? (optional) > ")?;
    record.submit(comment);
    save_feedback(store.as_ref(), &record)?;

    println!("{} people found this helpful", record.helpful);
    Ok(())
}
