//! Export handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Response, StatusCode},
};
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState};
use paisa_core::export::{self, ExportFormat};

/// Query parameters for expense export
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Output format (default: csv)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "csv".to_string()
}

/// GET /api/export - Export all expenses to CSV or JSON
pub async fn export_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportQuery>,
) -> Result<Response<Body>, AppError> {
    let format: ExportFormat = params
        .format
        .parse()
        .map_err(|_| AppError::bad_request("Invalid format. Use 'csv' or 'json'"))?;

    match format {
        ExportFormat::Csv => {
            let csv = export::export_csv(&state.db)?;
            let lines = csv.lines().count().saturating_sub(1);
            info!("Exported {} expenses to CSV", lines);

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
                .header(
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"expenses.csv\"",
                )
                .body(Body::from(csv))
                .map_err(|e| AppError::internal(&e.to_string()))
        }
        ExportFormat::Json => {
            let json = export::export_json(&state.db)?;

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "application/json")
                .header(
                    header::CONTENT_DISPOSITION,
                    format!(
                        "attachment; filename=\"expenses-{}.json\"",
                        chrono::Utc::now().format("%Y-%m-%d")
                    ),
                )
                .body(Body::from(json))
                .map_err(|e| AppError::internal(&e.to_string()))
        }
    }
}
