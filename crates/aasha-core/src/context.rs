//! Context summary for the companion service
//!
//! Builds the flat text digest of recent history that grounds the remote
//! companion's replies. The summary is handed over opaquely; the engine
//! never interprets or validates it further.

use crate::insights::RECENT_MOOD_WINDOW;
use crate::models::{JournalEntry, MoodEntry, UserProfile};

/// How many trailing journal entries appear in the summary
pub const RECENT_JOURNAL_WINDOW: usize = 3;

/// Derive the context summary string
///
/// Three labelled lines: the profile name (literal "Unknown" when absent),
/// the moods of the last 5 entries joined by comma, and the text of the
/// last 3 journal entries joined by semicolon. Empty histories render as
/// nothing after the label; there are no error conditions.
pub fn derive_context_summary(
    moods: &[MoodEntry],
    journal: &[JournalEntry],
    profile: Option<&UserProfile>,
) -> String {
    let name = profile.map(|p| p.name.as_str()).unwrap_or("Unknown");

    let recent_moods = moods[moods.len().saturating_sub(RECENT_MOOD_WINDOW)..]
        .iter()
        .map(|e| e.mood.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let recent_entries = journal[journal.len().saturating_sub(RECENT_JOURNAL_WINDOW)..]
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "User name: {}\nRecent moods: {}\nRecent journal entries: {}",
        name, recent_moods, recent_entries
    )
}
