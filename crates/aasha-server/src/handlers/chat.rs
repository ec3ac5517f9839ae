//! Chat companion handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use aasha_core::ai::{CompanionBackend, FALLBACK_REPLY};
use aasha_core::derive_context_summary;
use aasha_core::models::ChatMessage;

use super::read_store;
use crate::{AppError, AppState};

/// Request body for a chat turn
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Ordered prior conversation, oldest first
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    /// Whether to ground the reply in recent mood/journal context
    #[serde(default = "default_true")]
    pub include_context: bool,
}

fn default_true() -> bool {
    true
}

/// Response body for a chat turn
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/chat - One companion turn
///
/// The context summary is built synchronously under the read lock, which
/// is released before the backend call is awaited. Backend failures map to
/// the companion's fallback line rather than an error status; 503 is
/// reserved for "no backend configured".
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::bad_request("Message must not be empty"));
    }

    let companion = state
        .companion
        .as_ref()
        .ok_or_else(|| AppError::unavailable("Companion backend not configured"))?;

    let context = if body.include_context {
        let store = read_store(&state)?;
        Some(derive_context_summary(
            store.moods(),
            store.journal(),
            Some(store.profile()),
        ))
    } else {
        None
    };

    let reply = match companion
        .reply(&body.message, &body.history, context.as_deref())
        .await
    {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Companion reply failed, returning fallback");
            FALLBACK_REPLY.to_string()
        }
    };

    Ok(Json(ChatResponse { reply }))
}
