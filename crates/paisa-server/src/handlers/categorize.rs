//! Categorization handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use paisa_core::models::CategorySuggestion;

/// Request body for categorization
#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub description: String,
    #[serde(default)]
    pub amount: f64,
}

/// POST /api/categorize - Suggest a category for a description
///
/// The stored API key (if any) selects the remote classifier; without
/// one, or on any remote failure, the keyword table answers. Always
/// returns a suggestion.
pub async fn categorize_expense(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CategorizeRequest>,
) -> Result<Json<CategorySuggestion>, AppError> {
    let description = request.description.trim();
    if description.is_empty() {
        return Err(AppError::bad_request("Description must not be empty"));
    }

    let settings = state.db.get_settings()?;
    let suggestion = state
        .categorizer
        .categorize(description, request.amount, settings.llm_api_key.as_deref())
        .await;

    Ok(Json(suggestion))
}
