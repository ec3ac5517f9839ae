//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod chat;
pub mod content;
pub mod insights;
pub mod journal;
pub mod moods;
pub mod profile;
pub mod reminders;

// Re-export all handlers for use in router
pub use chat::*;
pub use content::*;
pub use insights::*;
pub use journal::*;
pub use moods::*;
pub use profile::*;
pub use reminders::*;

use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use aasha_core::HistoryStore;
use axum::Json;
use serde::Serialize;

use crate::{AppError, AppState};

/// Acquire the store read lock, mapping poisoning to a sanitized 500
pub(crate) fn read_store(state: &Arc<AppState>) -> Result<RwLockReadGuard<'_, HistoryStore>, AppError> {
    state
        .store
        .read()
        .map_err(|_| AppError::internal("State lock poisoned"))
}

/// Acquire the store write lock, mapping poisoning to a sanitized 500
pub(crate) fn write_store(
    state: &Arc<AppState>,
) -> Result<RwLockWriteGuard<'_, HistoryStore>, AppError> {
    state
        .store
        .write()
        .map_err(|_| AppError::internal("State lock poisoned"))
}

/// Liveness response for GET /api/health
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
