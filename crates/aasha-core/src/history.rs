//! In-memory history store
//!
//! Owns the ordered collections the derivation functions read. The store
//! itself has no derivation logic; it only appends, replaces today's mood,
//! and enforces the history bound. The whole store serializes so callers
//! (the CLI) can snapshot it between runs.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::seed_stories;
use crate::error::{Error, Result};
use crate::models::{JournalEntry, Mood, MoodEntry, Reminder, Story, UserProfile};

/// Most recent mood entries kept; older ones fall off the front
pub const MOOD_HISTORY_LIMIT: usize = 30;

/// Owner of all user state: mood history, journal, profile, reminders,
/// and the peer-story feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStore {
    moods: Vec<MoodEntry>,
    journal: Vec<JournalEntry>,
    profile: UserProfile,
    reminders: Vec<Reminder>,
    stories: Vec<Story>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            moods: Vec::new(),
            journal: Vec::new(),
            profile: UserProfile {
                name: "Friend".to_string(),
                bio: "Learning to prioritize myself.".to_string(),
                avatar: None,
            },
            reminders: vec![Reminder {
                id: Uuid::new_v4().to_string(),
                label: "Morning Check-in".to_string(),
                time: "08:00".to_string(),
                enabled: true,
            }],
            stories: seed_stories(),
        }
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Record a mood for the given date
    ///
    /// A second selection on the same date replaces that date's entry
    /// instead of duplicating it; otherwise the entry is appended and the
    /// history is trimmed to the most recent [`MOOD_HISTORY_LIMIT`].
    pub fn log_mood(&mut self, date: NaiveDate, mood: Mood) -> MoodEntry {
        let entry = MoodEntry { date, mood };

        if let Some(existing) = self.moods.iter_mut().find(|e| e.date == date) {
            *existing = entry;
        } else {
            self.moods.push(entry);
            if self.moods.len() > MOOD_HISTORY_LIMIT {
                let excess = self.moods.len() - MOOD_HISTORY_LIMIT;
                self.moods.drain(..excess);
            }
        }

        tracing::debug!(date = %date, mood = %mood, "Logged mood");
        entry
    }

    /// Record a mood for today (local calendar date)
    pub fn log_mood_today(&mut self, mood: Mood) -> MoodEntry {
        self.log_mood(Local::now().date_naive(), mood)
    }

    /// Append a journal entry; entries are immutable once created
    pub fn add_journal(
        &mut self,
        text: impl Into<String>,
        mood: Option<Mood>,
        tags: Option<Vec<String>>,
    ) -> JournalEntry {
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            text: text.into(),
            mood,
            tags,
        };
        self.journal.push(entry.clone());
        entry
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    /// Add a reminder, returning its generated id
    pub fn add_reminder(&mut self, label: impl Into<String>, time: impl Into<String>) -> Reminder {
        let reminder = Reminder {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            time: time.into(),
            enabled: true,
        };
        self.reminders.push(reminder.clone());
        reminder
    }

    /// Flip a reminder's enabled flag
    pub fn toggle_reminder(&mut self, id: &str) -> Result<&Reminder> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("reminder {}", id)))?;
        reminder.enabled = !reminder.enabled;
        Ok(reminder)
    }

    /// Prepend a shared story so the newest appears first
    pub fn add_story(&mut self, title: impl Into<String>, snippet: impl Into<String>, author: impl Into<String>) -> &Story {
        let next_id = self.stories.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.stories.insert(
            0,
            Story {
                id: next_id,
                title: title.into(),
                snippet: snippet.into(),
                author: author.into(),
            },
        );
        &self.stories[0]
    }
}
