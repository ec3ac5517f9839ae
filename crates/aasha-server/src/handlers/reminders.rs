//! Reminder handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use aasha_core::models::Reminder;

use super::{read_store, write_store};
use crate::{AppError, AppState};

/// Request body for creating a reminder
#[derive(Debug, Deserialize)]
pub struct AddReminderRequest {
    pub label: String,
    /// Local wall-clock time as "HH:MM"
    pub time: String,
}

/// GET /api/reminders
pub async fn list_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Reminder>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.reminders().to_vec()))
}

/// POST /api/reminders
pub async fn add_reminder(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddReminderRequest>,
) -> Result<Json<Reminder>, AppError> {
    if body.label.trim().is_empty() {
        return Err(AppError::bad_request("Reminder label must not be empty"));
    }

    let mut store = write_store(&state)?;
    let reminder = store.add_reminder(body.label, body.time);
    Ok(Json(reminder))
}

/// POST /api/reminders/:id/toggle - Flip the enabled flag
pub async fn toggle_reminder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Reminder>, AppError> {
    let mut store = write_store(&state)?;
    let reminder = store
        .toggle_reminder(&id)
        .map_err(|_| AppError::not_found("Reminder not found"))?
        .clone();
    Ok(Json(reminder))
}
