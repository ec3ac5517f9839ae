//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `mood` - Mood logging and history
//! - `journal` - Journal entries
//! - `insights` - Derived insights, stats, suggestions, context
//! - `chat` - Companion conversation and backend test
//! - `profile` - Profile view/update
//! - `content` - Stories, pathways, activities
//! - `reminders` - Check-in reminders
//! - `serve` - Web server command

pub mod chat;
pub mod content;
pub mod insights;
pub mod journal;
pub mod mood;
pub mod profile;
pub mod reminders;
pub mod serve;

// Re-export command functions for main.rs
pub use chat::*;
pub use content::*;
pub use insights::*;
pub use journal::*;
pub use mood::*;
pub use profile::*;
pub use reminders::*;
pub use serve::*;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use aasha_core::HistoryStore;

/// Load the snapshot file, or start fresh if it doesn't exist yet
pub fn load_store(path: &Path) -> Result<HistoryStore> {
    if !path.exists() {
        return Ok(HistoryStore::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let store = serde_json::from_str(&raw)
        .with_context(|| format!("Snapshot {} is not valid JSON", path.display()))?;
    Ok(store)
}

/// Write the snapshot file
pub fn save_store(path: &Path, store: &HistoryStore) -> Result<()> {
    let raw = serde_json::to_string_pretty(store)?;
    fs::write(path, raw)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    Ok(())
}

/// Truncate a string for table display
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
