//! Mood history handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use aasha_core::models::{Mood, MoodEntry};

use super::{read_store, write_store};
use crate::{AppError, AppState};

/// Request body for logging a mood
#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    pub mood: Mood,
    /// Defaults to today's local date; same-day logs replace
    pub date: Option<NaiveDate>,
}

/// GET /api/moods - Full bounded mood history, oldest first
pub async fn list_moods(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MoodEntry>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.moods().to_vec()))
}

/// POST /api/moods - Log (or replace) a day's mood
pub async fn log_mood(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LogMoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    let date = body.date.unwrap_or_else(|| Local::now().date_naive());
    let mut store = write_store(&state)?;
    let entry = store.log_mood(date, body.mood);
    Ok(Json(entry))
}
