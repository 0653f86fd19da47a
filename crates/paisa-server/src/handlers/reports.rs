//! Report handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use paisa_core::models::MonthlyReport;

/// GET /api/reports/monthly - Per-month spending breakdowns, newest first
pub async fn monthly_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlyReport>>, AppError> {
    let reports = paisa_core::reports::monthly_reports(&state.db)?;
    Ok(Json(reports))
}
