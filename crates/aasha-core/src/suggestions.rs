//! Conversation-opener suggestion chips
//!
//! A fixed base set of generic openers, adjusted by the single most recent
//! mood and the presence of journal entries. Deterministic for identical
//! inputs; the view layer calls this on every render.

use crate::models::{JournalEntry, Mood, MoodEntry};

/// Hard cap on the number of chips returned
pub const MAX_SUGGESTIONS: usize = 8;

/// Generic openers shown regardless of history
pub const BASE_OPENERS: &[&str] = &[
    "I'd like to talk through my day",
    "Help me untangle a feeling",
    "I just want to vent for a minute",
    "Give me a small act of self-care to try",
    "How do I set better boundaries at work?",
];

/// Opener appended when the journal has at least one entry
pub const JOURNAL_OPENER: &str = "Can we reflect on what I wrote in my journal recently?";

/// Mood-specific opener for the most recent mood, if that mood has one
///
/// Only stressed, sad, and happy carry an opener; neutral and content
/// leave the base set untouched.
pub fn mood_opener(mood: Mood) -> Option<&'static str> {
    match mood {
        Mood::Stressed => Some("I'm feeling stretched thin today. Can we slow things down?"),
        Mood::Sad => Some("I'm feeling low. Can you sit with me for a bit?"),
        Mood::Happy => Some("I'm in a great mood today and I want to keep it going!"),
        Mood::Neutral | Mood::Content => None,
    }
}

/// Derive the ordered chip list for the current histories
///
/// Order: mood-specific opener (if any) first, then the base set, then the
/// journal opener; truncated to [`MAX_SUGGESTIONS`].
pub fn derive_suggestion_chips(moods: &[MoodEntry], journal: &[JournalEntry]) -> Vec<String> {
    let mut chips: Vec<String> = Vec::with_capacity(BASE_OPENERS.len() + 2);

    if let Some(opener) = moods.last().and_then(|entry| mood_opener(entry.mood)) {
        chips.push(opener.to_string());
    }

    chips.extend(BASE_OPENERS.iter().map(|s| s.to_string()));

    if !journal.is_empty() {
        chips.push(JOURNAL_OPENER.to_string());
    }

    chips.truncate(MAX_SUGGESTIONS);
    chips
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn mood_entry(day: u32, mood: Mood) -> MoodEntry {
        MoodEntry {
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            mood,
        }
    }

    fn journal_entry(text: &str) -> JournalEntry {
        JournalEntry {
            id: "j1".to_string(),
            date: Utc::now(),
            text: text.to_string(),
            mood: None,
            tags: None,
        }
    }

    #[test]
    fn test_empty_histories_yield_base_set_only() {
        let chips = derive_suggestion_chips(&[], &[]);
        assert_eq!(chips.len(), BASE_OPENERS.len());
        for (chip, base) in chips.iter().zip(BASE_OPENERS) {
            assert_eq!(chip, base);
        }
    }

    #[test]
    fn test_happy_opener_comes_first() {
        let moods = vec![mood_entry(1, Mood::Neutral), mood_entry(2, Mood::Happy)];
        let chips = derive_suggestion_chips(&moods, &[]);
        assert_eq!(chips[0], mood_opener(Mood::Happy).unwrap());
        assert_eq!(chips[1], BASE_OPENERS[0]);
    }

    #[test]
    fn test_only_latest_mood_counts() {
        // Latest is neutral, so the earlier stressed entry adds nothing
        let moods = vec![mood_entry(1, Mood::Stressed), mood_entry(2, Mood::Neutral)];
        let chips = derive_suggestion_chips(&moods, &[]);
        assert_eq!(chips.len(), BASE_OPENERS.len());
    }

    #[test]
    fn test_journal_opener_appended_last() {
        let journal = vec![journal_entry("wrote something")];
        let chips = derive_suggestion_chips(&[], &journal);
        assert_eq!(chips.last().map(String::as_str), Some(JOURNAL_OPENER));
        assert_eq!(chips.len(), BASE_OPENERS.len() + 1);
    }

    #[test]
    fn test_never_more_than_cap() {
        let moods = vec![mood_entry(1, Mood::Sad)];
        let journal = vec![journal_entry("entry")];
        let chips = derive_suggestion_chips(&moods, &journal);
        assert!(chips.len() <= MAX_SUGGESTIONS);
        // sad opener + 5 base + journal opener = 7
        assert_eq!(chips.len(), 7);
    }

    #[test]
    fn test_deterministic() {
        let moods = vec![mood_entry(1, Mood::Stressed)];
        let journal = vec![journal_entry("entry")];
        assert_eq!(
            derive_suggestion_chips(&moods, &journal),
            derive_suggestion_chips(&moods, &journal)
        );
    }
}
