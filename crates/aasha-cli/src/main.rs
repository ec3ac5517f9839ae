//! Aasha CLI - personal wellness companion
//!
//! Usage:
//!   aasha mood log happy         Log today's mood
//!   aasha journal add "..."      Write a journal entry
//!   aasha insights               See derived insights
//!   aasha chat "..."             Talk to the companion
//!   aasha serve --port 3000      Start the web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Mood { action } => match action {
            MoodAction::Log { mood } => commands::cmd_mood_log(&cli.data, &mood),
            MoodAction::List => commands::cmd_mood_list(&cli.data),
        },
        Commands::Journal { action } => match action {
            JournalAction::Add { text, mood, tag } => {
                commands::cmd_journal_add(&cli.data, &text, mood.as_deref(), tag)
            }
            JournalAction::List => commands::cmd_journal_list(&cli.data),
        },
        Commands::Insights => commands::cmd_insights(&cli.data),
        Commands::Stats => commands::cmd_stats(&cli.data),
        Commands::Suggest => commands::cmd_suggest(&cli.data),
        Commands::Context => commands::cmd_context(&cli.data),
        Commands::Chat {
            message,
            no_context,
        } => commands::cmd_chat(&cli.data, &message, no_context).await,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::cmd_profile_show(&cli.data),
            ProfileAction::Set { name, bio } => {
                commands::cmd_profile_set(&cli.data, name.as_deref(), bio.as_deref())
            }
        },
        Commands::Stories => commands::cmd_stories(&cli.data),
        Commands::Pathways => commands::cmd_pathways(),
        Commands::Activities => commands::cmd_activities(),
        Commands::Reminders { action } => match action.unwrap_or(RemindersAction::List) {
            RemindersAction::List => commands::cmd_reminders_list(&cli.data),
            RemindersAction::Add { label, time } => {
                commands::cmd_reminders_add(&cli.data, &label, &time)
            }
            RemindersAction::Toggle { id } => commands::cmd_reminders_toggle(&cli.data, &id),
        },
        Commands::Companion { action } => match action {
            CompanionAction::Test => commands::cmd_companion_test().await,
        },
        Commands::Serve { port, host } => commands::cmd_serve(&cli.data, &host, port).await,
    }
}
