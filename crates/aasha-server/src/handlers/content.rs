//! Static content and story feed handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use aasha_core::content::{comfort_activities, growth_pathways};
use aasha_core::models::{Activity, GrowthPathway, Story};

use super::{read_store, write_store};
use crate::{AppError, AppState};

/// Request body for sharing a peer story
#[derive(Debug, Deserialize)]
pub struct AddStoryRequest {
    pub title: String,
    pub snippet: String,
    pub author: String,
}

/// GET /api/stories - Newest first
pub async fn list_stories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Story>>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.stories().to_vec()))
}

/// POST /api/stories - Share a story; it appears at the top of the feed
pub async fn add_story(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddStoryRequest>,
) -> Result<Json<Story>, AppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::bad_request("Story title must not be empty"));
    }

    let mut store = write_store(&state)?;
    let story = store
        .add_story(body.title, body.snippet, body.author)
        .clone();
    Ok(Json(story))
}

/// GET /api/pathways - The guided growth pathways (static)
pub async fn list_pathways() -> Json<Vec<GrowthPathway>> {
    Json(growth_pathways())
}

/// GET /api/activities - The comfort activities (static)
pub async fn list_activities() -> Json<Vec<Activity>> {
    Json(comfort_activities())
}
