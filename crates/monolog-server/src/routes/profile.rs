use axum::Json;
use axum::extract::State;

use monolog_core::models::profile::{Profile, ProfileUpdate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    let profile = state.profile.read().await;
    Json(profile.clone())
}

/// Merge the update into the stored record and echo the whole record back.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = state.profile.write().await;
    profile.apply(update)?;
    tracing::info!(name = %profile.name, "profile updated");
    Ok(Json(profile.clone()))
}
