//! Interactive swipe loop.

use super::utils::{open_engine, print_card, prompt};
use anyhow::Result;
use colored::Colorize;
use yumdeck_core::deck::Direction;

/// What the user typed at the swipe prompt.
#[derive(Debug, PartialEq, Eq)]
enum SwipeInput {
    Decide(Direction),
    Quit,
    Unknown,
}

fn parse_input(input: &str) -> SwipeInput {
    match input.to_lowercase().as_str() {
        "y" | "yes" | "save" => SwipeInput::Decide(Direction::Accept),
        "n" | "no" | "skip" => SwipeInput::Decide(Direction::Reject),
        "q" | "quit" => SwipeInput::Quit,
        _ => SwipeInput::Unknown,
    }
}

pub fn run() -> Result<()> {
    let mut deck = open_engine()?;

    if deck.is_finished() {
        print_summary(&deck);
        return Ok(());
    }

    while let Some(recipe) = deck.peek_current() {
        print_card(recipe);
        let input = prompt(&format!(
            "\n{} save · {} skip · {} quit > ",
            "[y]".green(),
            "[n]".red(),
            "[q]".dimmed()
        ))?;
        match parse_input(&input) {
            SwipeInput::Decide(direction) => {
                if let Some(swipe) = deck.decide(direction)? {
                    let flash = match swipe.direction {
                        Direction::Accept => "❤️  saved".green(),
                        Direction::Reject => "❌ skipped".red(),
                    };
                    println!("{} {}", flash, swipe.recipe.name);
                }
            }
            SwipeInput::Quit => {
                println!("See you next time!");
                return Ok(());
            }
            SwipeInput::Unknown => {
                println!("{}", "Type y to save, n to skip, q to quit.".dimmed());
            }
        }
    }

    print_summary(&deck);
    Ok(())
}

fn print_summary(deck: &yumdeck_core::deck::DeckEngine) {
    let counts = deck.counts();
    println!();
    println!("{}", "🎉 You've seen them all!".bold());
    println!(
        "You saved {} recipes from {} swipes.",
        counts.favorited.to_string().green(),
        counts.seen
    );
    println!(
        "{}",
        "Run 'yumdeck reset' to shuffle the deck again (saved recipes survive).".dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("y"), SwipeInput::Decide(Direction::Accept));
        assert_eq!(parse_input("SAVE"), SwipeInput::Decide(Direction::Accept));
        assert_eq!(parse_input("n"), SwipeInput::Decide(Direction::Reject));
        assert_eq!(parse_input("q"), SwipeInput::Quit);
        assert_eq!(parse_input("huh"), SwipeInput::Unknown);
    }
}
