//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a derived insight statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Something recurring in recent moods or journal themes
    Pattern,
    /// A habit or quality worth reinforcing
    Strength,
    /// A concrete next step to try
    Suggestion,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Pattern => "pattern",
            InsightKind::Strength => "strength",
            InsightKind::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pattern" => Ok(InsightKind::Pattern),
            "strength" => Ok(InsightKind::Strength),
            "suggestion" => Ok(InsightKind::Suggestion),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// A derived, categorized observation about recent history
///
/// Statements are recomputed from the current history on every request
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightStatement {
    pub kind: InsightKind,
    pub title: String,
    pub text: String,
}

impl InsightStatement {
    pub fn new(kind: InsightKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Derived usage statistics
///
/// All values are linear proxies computed from the two input histories,
/// not measured telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Rough estimate of time spent in the app, in minutes
    pub estimated_engagement_minutes: u64,
    /// Estimated count of self-care actions taken (floored at 2)
    pub action_count: u32,
    /// Work-keyword occurrences across all journal text
    pub work_mention_count: usize,
}
