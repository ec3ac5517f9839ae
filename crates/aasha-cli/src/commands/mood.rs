//! Mood command implementations

use std::path::Path;

use anyhow::{anyhow, Result};

use aasha_core::models::Mood;

use super::{load_store, save_store};

pub fn cmd_mood_log(data_path: &Path, mood_str: &str) -> Result<()> {
    let mood: Mood = mood_str
        .parse()
        .map_err(|e: String| anyhow!("{} (expected happy, content, neutral, sad, or stressed)", e))?;

    let mut store = load_store(data_path)?;
    let entry = store.log_mood_today(mood);
    save_store(data_path, &store)?;

    println!();
    println!("{} Logged {} for {}", mood.emoji(), mood, entry.date);
    Ok(())
}

pub fn cmd_mood_list(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;

    println!();
    if store.moods().is_empty() {
        println!("No moods logged yet. Try: aasha mood log happy");
        return Ok(());
    }

    println!("📅 Mood history (last {} days kept)", aasha_core::MOOD_HISTORY_LIMIT);
    println!("   ─────────────────────────────");
    for entry in store.moods() {
        println!("   {}  {}  {}", entry.date, entry.mood.emoji(), entry.mood);
    }
    Ok(())
}
