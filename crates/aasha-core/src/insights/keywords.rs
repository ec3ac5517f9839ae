//! Fixed keyword sets scanned over journal text
//!
//! Counting is plain substring-occurrence counting, summed across each
//! set over the lowercased concatenation of all journal text. Matches
//! inside longer words are intended: "stress" hits "stressed" and
//! "stressful" alike. This crude semantics is deliberate and load-bearing;
//! do not "fix" it to word-boundary matching.

/// Words suggesting strain or pressure
pub const STRESS_KEYWORDS: &[&str] = &[
    "stress", "anxious", "anxiety", "overwhelm", "deadline", "pressure", "exhaust", "burnout",
];

/// Words suggesting an upbeat frame of mind
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy", "grateful", "gratitude", "joy", "excited", "proud", "calm", "hopeful",
];

/// Words about sleep and rest
///
/// "rest" is deliberately absent: it substring-matches "stressed".
pub const SLEEP_KEYWORDS: &[&str] = &["sleep", "slept", "insomnia", "dream"];

/// Words about the workplace
pub const WORK_KEYWORDS: &[&str] = &["work", "meeting", "boss", "office", "project", "colleague"];

/// Count non-overlapping occurrences of every keyword in `set` within `text`
///
/// `text` is expected to be lowercased already; the keyword lists are all
/// lowercase literals.
pub fn count_hits(text: &str, set: &[&str]) -> usize {
    set.iter().map(|kw| text.matches(kw).count()).sum()
}

/// Lowercased concatenation of all journal text, the buffer every keyword
/// set is counted against
pub fn scan_buffer<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n")
}
