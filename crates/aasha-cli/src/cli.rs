//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aasha - Your personal wellness companion
#[derive(Parser)]
#[command(name = "aasha")]
#[command(about = "Mood tracking, journaling, and a companion to talk to", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file holding your history between runs
    #[arg(long, default_value = "aasha.json", global = true)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log or review your mood
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Write or review journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Show the three derived insights for your recent history
    Insights,

    /// Show derived usage statistics
    Stats,

    /// Show conversation-opener suggestions
    Suggest,

    /// Show the context summary the companion is grounded with
    Context,

    /// Send one message to the companion
    Chat {
        /// What you want to say
        message: String,

        /// Skip grounding the reply in your recent history
        #[arg(long)]
        no_context: bool,
    },

    /// View or update your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Browse peer stories
    Stories,

    /// Browse guided growth pathways
    Pathways,

    /// Browse comfort activities
    Activities,

    /// Manage check-in reminders
    Reminders {
        #[command(subcommand)]
        action: Option<RemindersAction>,
    },

    /// Test the configured companion backend
    Companion {
        #[command(subcommand)]
        action: CompanionAction,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log today's mood (replaces an earlier selection for today)
    Log {
        /// One of: happy, content, neutral, sad, stressed
        mood: String,
    },
    /// List the bounded mood history
    List,
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Append a journal entry
    Add {
        /// The entry text
        text: String,

        /// Mood to attach to the entry
        #[arg(short, long)]
        mood: Option<String>,

        /// Tags to attach (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// List all journal entries
    List,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current profile
    Show,
    /// Update the profile
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RemindersAction {
    /// List reminders (default)
    List,
    /// Add a reminder
    Add {
        /// Short label, e.g. "Evening wind-down"
        label: String,

        /// Local time as HH:MM
        #[arg(short, long, default_value = "08:00")]
        time: String,
    },
    /// Toggle a reminder on or off
    Toggle {
        /// Reminder id (see `aasha reminders list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CompanionAction {
    /// Check connectivity and send a short test message
    Test,
}
