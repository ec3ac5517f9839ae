//! Journal handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use aasha_core::models::{JournalEntry, Mood};

use super::{read_store, write_store};
use crate::{AppError, AppState};

/// Request body for appending a journal entry
#[derive(Debug, Deserialize)]
pub struct AddJournalRequest {
    pub text: String,
    pub mood: Option<Mood>,
    pub tags: Option<Vec<String>>,
}

/// GET /api/journal - All journal entries, oldest first
pub async fn list_journal(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.journal().to_vec()))
}

/// POST /api/journal - Append an entry (entries are immutable once created)
pub async fn add_journal_entry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddJournalRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    if body.text.trim().is_empty() {
        return Err(AppError::bad_request("Journal text must not be empty"));
    }

    let mut store = write_store(&state)?;
    let entry = store.add_journal(body.text, body.mood, body.tags);
    Ok(Json(entry))
}
