//! Profile handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use aasha_core::models::UserProfile;

use super::{read_store, write_store};
use crate::{AppError, AppState};

/// Request body for replacing the profile
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub bio: String,
    pub avatar: Option<String>,
}

/// GET /api/profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserProfile>, AppError> {
    let store = read_store(&state)?;
    Ok(Json(store.profile().clone()))
}

/// PUT /api/profile - Replace the single profile record
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::bad_request("Profile name must not be empty"));
    }

    let profile = UserProfile {
        name: body.name,
        bio: body.bio,
        avatar: body.avatar,
    };

    let mut store = write_store(&state)?;
    store.set_profile(profile.clone());
    Ok(Json(profile))
}
