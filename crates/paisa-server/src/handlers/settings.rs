//! Settings handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use paisa_core::models::{AppSettings, SettingsUpdate};

/// GET /api/settings - Current settings (defaults when never saved)
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AppSettings>, AppError> {
    let settings = state.db.get_settings()?;
    Ok(Json(settings))
}

/// PUT /api/settings - Partial update; omitted fields are preserved
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<AppSettings>, AppError> {
    let settings = state.db.update_settings(&update)?;
    Ok(Json(settings))
}
