//! Insight Engine - derived observations over mood and journal history
//!
//! Turns the raw histories into a small, fixed-shape set of human-readable
//! statements and usage statistics. The engine is stateless: every call
//! recomputes from whatever history the caller passes in.
//!
//! ## Categories
//!
//! - **Pattern** - recurring themes (sleep, work stress, positivity)
//! - **Strength** - habits worth reinforcing
//! - **Suggestion** - one concrete next step
//!
//! Each category always yields exactly one statement; explicit fallbacks
//! make every branch total, including completely empty histories.

pub mod engine;
pub mod keywords;
pub mod types;

pub use engine::{derive_insights, derive_stats, recent_mood_average, RECENT_MOOD_WINDOW};
pub use keywords::{
    count_hits, scan_buffer, POSITIVE_KEYWORDS, SLEEP_KEYWORDS, STRESS_KEYWORDS, WORK_KEYWORDS,
};
pub use types::{DerivedStats, InsightKind, InsightStatement};
