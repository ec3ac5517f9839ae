//! Aasha Core Library
//!
//! Shared functionality for the Aasha wellness companion:
//! - Domain models (moods, journal entries, profile, reminders, content)
//! - In-memory history store with bounded mood history
//! - Insight engine deriving statements and stats from recent history
//! - Conversation-suggestion chips
//! - Context summary assembly for the chat companion
//! - Pluggable companion AI backends (Gemini, Ollama, mock)
//! - Static psychoeducational content

pub mod ai;
pub mod content;
pub mod context;
pub mod error;
pub mod history;
pub mod insights;
pub mod models;
pub mod suggestions;

pub use ai::{
    CompanionBackend, CompanionClient, GeminiBackend, MockBackend, OllamaBackend, FALLBACK_REPLY,
    SYSTEM_INSTRUCTION,
};
pub use content::{comfort_activities, growth_pathways, seed_stories};
pub use context::{derive_context_summary, RECENT_JOURNAL_WINDOW};
pub use error::{Error, Result};
pub use history::{HistoryStore, MOOD_HISTORY_LIMIT};
pub use insights::{
    derive_insights, derive_stats, recent_mood_average, DerivedStats, InsightKind,
    InsightStatement, RECENT_MOOD_WINDOW,
};
pub use models::{
    Activity, ActivityCategory, ChatMessage, ChatRole, GrowthPathway, JournalEntry, Mood,
    MoodEntry, Reminder, Story, UserProfile,
};
pub use suggestions::{derive_suggestion_chips, BASE_OPENERS, JOURNAL_OPENER, MAX_SUGGESTIONS};
