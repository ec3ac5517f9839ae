//! Reminder commands

use std::path::Path;

use anyhow::{bail, Context, Result};

use super::{load_store, save_store};

pub fn cmd_reminders_list(data_path: &Path) -> Result<()> {
    let store = load_store(data_path)?;

    println!();
    println!("⏰ Reminders ({})", store.reminders().len());
    println!("   ──────────────────────────────────────────────");
    for reminder in store.reminders() {
        let state = if reminder.enabled { "on " } else { "off" };
        println!("   [{}] {}  {}  {}", state, reminder.time, reminder.label, reminder.id);
    }
    Ok(())
}

pub fn cmd_reminders_add(data_path: &Path, label: &str, time: &str) -> Result<()> {
    if label.trim().is_empty() {
        bail!("Reminder label cannot be empty");
    }

    let mut store = load_store(data_path)?;
    let reminder = store.add_reminder(label, time);
    println!("✅ Added reminder \"{}\" at {}", reminder.label, reminder.time);
    save_store(data_path, &store)?;
    Ok(())
}

pub fn cmd_reminders_toggle(data_path: &Path, id: &str) -> Result<()> {
    let mut store = load_store(data_path)?;
    let (label, enabled) = {
        let reminder = store
            .toggle_reminder(id)
            .with_context(|| format!("No reminder with id {id}"))?;
        (reminder.label.clone(), reminder.enabled)
    };
    save_store(data_path, &store)?;

    let state = if enabled { "on" } else { "off" };
    println!("✅ \"{}\" is now {}", label, state);
    Ok(())
}
