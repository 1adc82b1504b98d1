use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "yumdeck")]
#[command(about = "Yumdeck - swipe through recipes from your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swipe through the deck interactively
    Swipe,
    /// List saved recipes
    Saved,
    /// Show swipe counters
    Stats,
    /// Clear swipe history (saved recipes survive)
    Reset,
    /// Tell us whether the tool was helpful
    Feedback,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Swipe => commands::swipe::run()?,
        Commands::Saved => commands::saved::run()?,
        Commands::Stats => commands::stats::run()?,
        Commands::Reset => commands::reset::run()?,
        Commands::Feedback => commands::feedback::run()?,
    }

    Ok(())
}
