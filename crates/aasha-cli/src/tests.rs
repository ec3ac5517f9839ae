//! CLI command tests
//!
//! Commands read and write a JSON snapshot file, so each test gets its
//! own temp directory.

use std::path::PathBuf;

use tempfile::TempDir;

use aasha_core::Mood;

use crate::commands::{self, load_store, truncate};

fn setup_snapshot() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aasha.json");
    (dir, path)
}

// ========== Mood Command Tests ==========

#[test]
fn test_cmd_mood_log_creates_snapshot() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_mood_log(&path, "happy").unwrap();

    assert!(path.exists());
    let store = load_store(&path).unwrap();
    assert_eq!(store.moods().len(), 1);
    assert_eq!(store.moods()[0].mood, Mood::Happy);
}

#[test]
fn test_cmd_mood_log_replaces_same_day() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_mood_log(&path, "sad").unwrap();
    commands::cmd_mood_log(&path, "content").unwrap();

    let store = load_store(&path).unwrap();
    assert_eq!(store.moods().len(), 1);
    assert_eq!(store.moods()[0].mood, Mood::Content);
}

#[test]
fn test_cmd_mood_log_rejects_unknown() {
    let (_dir, path) = setup_snapshot();
    let result = commands::cmd_mood_log(&path, "exuberant");
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_cmd_mood_list_empty() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_mood_list(&path).is_ok());
}

// ========== Journal Command Tests ==========

#[test]
fn test_cmd_journal_add() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_journal_add(&path, "Felt grateful for a slow morning.", None, vec![]).unwrap();

    let store = load_store(&path).unwrap();
    assert_eq!(store.journal().len(), 1);
    assert_eq!(store.journal()[0].text, "Felt grateful for a slow morning.");
    assert!(store.journal()[0].mood.is_none());
    assert!(store.journal()[0].tags.is_none());
}

#[test]
fn test_cmd_journal_add_with_mood_and_tags() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_journal_add(
        &path,
        "Long day at the office.",
        Some("stressed"),
        vec!["work".to_string()],
    )
    .unwrap();

    let store = load_store(&path).unwrap();
    let entry = &store.journal()[0];
    assert_eq!(entry.mood, Some(Mood::Stressed));
    assert_eq!(entry.tags.as_deref(), Some(&["work".to_string()][..]));
}

#[test]
fn test_cmd_journal_add_rejects_empty() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_journal_add(&path, "   ", None, vec![]).is_err());
}

#[test]
fn test_cmd_journal_list() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_journal_add(&path, "First entry", None, vec![]).unwrap();
    assert!(commands::cmd_journal_list(&path).is_ok());
}

// ========== Derived View Tests ==========

#[test]
fn test_cmd_insights_runs_on_empty_history() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_insights(&path).is_ok());
}

#[test]
fn test_cmd_stats_runs() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_journal_add(&path, "An entry", None, vec![]).unwrap();
    commands::cmd_mood_log(&path, "neutral").unwrap();
    assert!(commands::cmd_stats(&path).is_ok());
}

#[test]
fn test_cmd_suggest_runs() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_mood_log(&path, "happy").unwrap();
    assert!(commands::cmd_suggest(&path).is_ok());
}

#[test]
fn test_cmd_context_runs() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_context(&path).is_ok());
}

// ========== Profile Command Tests ==========

#[test]
fn test_cmd_profile_set_name_only_keeps_bio() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_profile_set(&path, Some("Asha"), None).unwrap();

    let store = load_store(&path).unwrap();
    assert_eq!(store.profile().name, "Asha");
    assert_eq!(store.profile().bio, "Learning to prioritize myself.");
}

#[test]
fn test_cmd_profile_set_requires_a_field() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_profile_set(&path, None, None).is_err());
}

#[test]
fn test_cmd_profile_set_rejects_empty_name() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_profile_set(&path, Some("  "), None).is_err());
}

#[test]
fn test_cmd_profile_show() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_profile_show(&path).is_ok());
}

// ========== Reminder Command Tests ==========

#[test]
fn test_cmd_reminders_add_and_toggle() {
    let (_dir, path) = setup_snapshot();
    commands::cmd_reminders_add(&path, "Evening wind-down", "21:30").unwrap();

    let store = load_store(&path).unwrap();
    // Seeded morning check-in plus the new one
    assert_eq!(store.reminders().len(), 2);
    let added = store
        .reminders()
        .iter()
        .find(|r| r.label == "Evening wind-down")
        .unwrap();
    assert!(added.enabled);

    let id = added.id.clone();
    commands::cmd_reminders_toggle(&path, &id).unwrap();
    let store = load_store(&path).unwrap();
    let toggled = store.reminders().iter().find(|r| r.id == id).unwrap();
    assert!(!toggled.enabled);
}

#[test]
fn test_cmd_reminders_toggle_unknown_id() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_reminders_toggle(&path, "nope").is_err());
}

#[test]
fn test_cmd_reminders_list() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_reminders_list(&path).is_ok());
}

// ========== Content Command Tests ==========

#[test]
fn test_cmd_stories_shows_seeds() {
    let (_dir, path) = setup_snapshot();
    assert!(commands::cmd_stories(&path).is_ok());
    let store = load_store(&path).unwrap();
    assert_eq!(store.stories().len(), 3);
}

#[test]
fn test_cmd_pathways_and_activities() {
    assert!(commands::cmd_pathways().is_ok());
    assert!(commands::cmd_activities().is_ok());
}

// ========== Helper Function Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    let cut = truncate("a rather long journal entry", 10);
    assert_eq!(cut.chars().count(), 10);
    assert!(cut.ends_with('…'));
}

#[test]
fn test_load_store_missing_file_starts_fresh() {
    let (_dir, path) = setup_snapshot();
    let store = load_store(&path).unwrap();
    assert!(store.moods().is_empty());
    assert_eq!(store.profile().name, "Friend");
}

#[test]
fn test_load_store_rejects_garbage() {
    let (_dir, path) = setup_snapshot();
    std::fs::write(&path, "not json").unwrap();
    assert!(load_store(&path).is_err());
}
