//! Derived-view handlers: insights, suggestion chips, stats, context

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use aasha_core::insights::{derive_insights, derive_stats, DerivedStats, InsightStatement};
use aasha_core::suggestions::derive_suggestion_chips;
use aasha_core::derive_context_summary;

use super::read_store;
use crate::{AppError, AppState};

/// GET /api/insights - Exactly three statements: pattern, strength, suggestion
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InsightStatement>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(derive_insights(store.moods(), store.journal())))
}

/// GET /api/suggestions - Ordered conversation-opener chips (max 8)
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(derive_suggestion_chips(store.moods(), store.journal())))
}

/// GET /api/stats - Derived usage statistics
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DerivedStats>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(derive_stats(store.moods(), store.journal())))
}

/// Response wrapper for the context digest
#[derive(Serialize)]
pub struct ContextResponse {
    pub summary: String,
}

/// GET /api/context - The digest the chat endpoint grounds replies with
pub async fn get_context_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ContextResponse>, AppError> {
    let store = read_store(&state)?;
    let summary = derive_context_summary(store.moods(), store.journal(), Some(store.profile()));
    Ok(Json(ContextResponse { summary }))
}
