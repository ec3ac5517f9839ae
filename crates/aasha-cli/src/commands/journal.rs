//! Journal command implementations

use std::path::Path;

use anyhow::{anyhow, bail, Result};

use aasha_core::models::Mood;

use super::{load_store, save_store, truncate};

pub fn cmd_journal_add(
    data_path: &Path,
    text: &str,
    mood: Option<&str>,
    tags: Vec<String>,
) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Journal text must not be empty");
    }

    let mood = mood
        .map(|m| {
            m.parse::<Mood>()
                .map_err(|e: String| anyhow!("{} (expected happy, content, neutral, sad, or stressed)", e))
        })
        .transpose()?;
    let tags = if tags.is_empty() { None } else { Some(tags) };

    let mut store = load_store(data_path)?;
    let entry_date = store.add_journal(text, mood, tags).date;
    save_store(data_path, &store)?;

    println!();
    println!("📝 Entry saved ({})", entry_date.format("%Y-%m-%d %H:%M UTC"));
    println!("   Entries so far: {}", store.journal().len());
    Ok(())
}

pub fn cmd_journal_list(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;

    println!();
    if store.journal().is_empty() {
        println!("No journal entries yet. Try: aasha journal add \"Today I...\"");
        return Ok(());
    }

    println!("📖 Journal ({} entries)", store.journal().len());
    println!("   ─────────────────────────────────────────────────────────────");
    for entry in store.journal() {
        let mood = entry
            .mood
            .map(|m| format!(" {}", m.emoji()))
            .unwrap_or_default();
        println!(
            "   {}{}  {}",
            entry.date.format("%Y-%m-%d %H:%M"),
            mood,
            truncate(&entry.text, 60)
        );
        if let Some(tags) = &entry.tags {
            println!("              #{}", tags.join(" #"));
        }
    }
    Ok(())
}
