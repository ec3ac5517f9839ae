//! Domain models for Aasha

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single mood selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Content,
    Neutral,
    Sad,
    Stressed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Content => "content",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
        }
    }

    /// Fixed numeric score used for averaging (stressed=1 .. happy=5)
    pub fn score(&self) -> u8 {
        match self {
            Self::Stressed => 1,
            Self::Sad => 2,
            Self::Neutral => 3,
            Self::Content => 4,
            Self::Happy => 5,
        }
    }

    /// Display emoji for chart axes and CLI output
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Stressed => "😟",
            Self::Sad => "😔",
            Self::Neutral => "😐",
            Self::Content => "😌",
            Self::Happy => "😊",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "content" => Ok(Self::Content),
            "neutral" => Ok(Self::Neutral),
            "sad" => Ok(Self::Sad),
            "stressed" => Ok(Self::Stressed),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One calendar-day mood selection
///
/// The history keeps at most one entry per date; selecting a mood again
/// on the same day replaces that day's entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}

/// One free-text reflection with a timestamp
///
/// Journal entries are append-only: never edited or deleted once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The single mutable user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One message in a companion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
        }
    }
}

/// A daily check-in reminder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub label: String,
    /// Local wall-clock time as "HH:MM"
    pub time: String,
    pub enabled: bool,
}

/// An anonymized peer story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    pub snippet: String,
    pub author: String,
}

/// A guided growth pathway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPathway {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Emotional state a comfort activity is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Anxious,
    Stressed,
    Calm,
    Overwhelmed,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Stressed => "stressed",
            Self::Calm => "calm",
            Self::Overwhelmed => "overwhelmed",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A short guided comfort activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub category: ActivityCategory,
}
