//! Pure derivation of insight statements and usage statistics
//!
//! Everything in this module is a total, synchronous function of the two
//! input histories: no I/O, no clock reads, no randomness. Under-populated
//! history is handled by explicit fallback branches, never by an error.

use crate::models::{JournalEntry, MoodEntry};

use super::keywords::{
    count_hits, scan_buffer, POSITIVE_KEYWORDS, SLEEP_KEYWORDS, STRESS_KEYWORDS, WORK_KEYWORDS,
};
use super::types::{DerivedStats, InsightKind, InsightStatement};

/// How many trailing mood entries feed the recent average
pub const RECENT_MOOD_WINDOW: usize = 5;

/// Mean mood score over the last [`RECENT_MOOD_WINDOW`] entries
///
/// `None` when the mood history is empty; the guard exists so callers
/// never divide by zero (or lean on NaN semantics).
pub fn recent_mood_average(moods: &[MoodEntry]) -> Option<f64> {
    if moods.is_empty() {
        return None;
    }
    let recent = &moods[moods.len().saturating_sub(RECENT_MOOD_WINDOW)..];
    let sum: u32 = recent.iter().map(|e| e.mood.score() as u32).sum();
    Some(sum as f64 / recent.len() as f64)
}

/// Derive exactly three insight statements: one pattern, one strength,
/// one suggestion, in that order
///
/// Every category ends in an unconditional fallback, so the result length
/// is always 3 regardless of how sparse the histories are.
pub fn derive_insights(moods: &[MoodEntry], journal: &[JournalEntry]) -> Vec<InsightStatement> {
    let recent_avg = recent_mood_average(moods);
    let buffer = scan_buffer(journal.iter().map(|e| e.text.as_str()));

    let stress = count_hits(&buffer, STRESS_KEYWORDS);
    let positive = count_hits(&buffer, POSITIVE_KEYWORDS);
    let sleep = count_hits(&buffer, SLEEP_KEYWORDS);
    let work = count_hits(&buffer, WORK_KEYWORDS);

    tracing::debug!(
        stress,
        positive,
        sleep,
        work,
        recent_avg = ?recent_avg,
        journal_count = journal.len(),
        "Derived insight signals"
    );

    let pattern = if sleep > 1 {
        InsightStatement::new(
            InsightKind::Pattern,
            "Sleep Patterns",
            "Sleep has come up more than once in your journal. Winding down a little earlier might be worth a try.",
        )
    } else if work > 3 && stress > 2 {
        InsightStatement::new(
            InsightKind::Pattern,
            "Work Stress",
            "Work is weighing on you lately. A short break between meetings could help you reset.",
        )
    } else if positive > stress {
        InsightStatement::new(
            InsightKind::Pattern,
            "Positivity Peak",
            "Your recent entries lean positive. Whatever you're doing, it's working.",
        )
    } else if journal.is_empty() {
        InsightStatement::new(
            InsightKind::Pattern,
            "Getting Started",
            "Your story starts here. Write your first journal entry to unlock deeper patterns.",
        )
    } else {
        InsightStatement::new(
            InsightKind::Pattern,
            "Steady Flow",
            "Your days have settled into a steady rhythm. Small check-ins keep it that way.",
        )
    };

    let strength = if journal.len() > 5 {
        InsightStatement::new(
            InsightKind::Strength,
            "Deep Reflector",
            format!(
                "You've journaled {} times. That kind of reflection builds real self-awareness.",
                journal.len()
            ),
        )
    } else if recent_avg.is_some_and(|avg| avg > 4.0) {
        InsightStatement::new(
            InsightKind::Strength,
            "Resilience",
            "Your mood has stayed bright lately. You're riding the good days well.",
        )
    } else {
        InsightStatement::new(
            InsightKind::Strength,
            "Consistency",
            "You keep showing up for yourself. That habit is its own quiet strength.",
        )
    };

    let suggestion = if recent_avg.is_some_and(|avg| avg < 3.0) || stress > 2 {
        InsightStatement::new(
            InsightKind::Suggestion,
            "Try This",
            "Feeling stretched thin? Two minutes of deep belly breathing can reset your nervous system.",
        )
    } else if positive > 2 {
        InsightStatement::new(
            InsightKind::Suggestion,
            "Gratitude",
            "You're noticing good things. Capture three of them in a gratitude entry tonight.",
        )
    } else {
        InsightStatement::new(
            InsightKind::Suggestion,
            "Reflection",
            "What's the best thing that happened today? Note it down.",
        )
    };

    vec![pattern, strength, suggestion]
}

/// Derive usage statistics from the two histories
///
/// The engagement figure is a linear proxy (15 minutes per journal entry,
/// 2 per mood check-in), an estimate rather than telemetry.
pub fn derive_stats(moods: &[MoodEntry], journal: &[JournalEntry]) -> DerivedStats {
    let journal_count = journal.len();
    let mood_count = moods.len();

    let buffer = scan_buffer(journal.iter().map(|e| e.text.as_str()));

    DerivedStats {
        estimated_engagement_minutes: (journal_count as u64) * 15 + (mood_count as u64) * 2,
        action_count: std::cmp::max(2, (journal_count as f64 * 1.2).floor() as u32 + 3),
        work_mention_count: count_hits(&buffer, WORK_KEYWORDS),
    }
}
