//! Expense CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{AppError, AppState, SuccessResponse};
use paisa_core::models::{Expense, NewExpense};

/// GET /api/expenses - List all expenses, most recent date first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let expenses = state.db.list_expenses()?;
    Ok(Json(expenses))
}

/// POST /api/expenses - Record a new expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewExpense>,
) -> Result<Json<Expense>, AppError> {
    let expense = state.db.add_expense(&new)?;
    info!(id = %expense.id, amount = expense.amount, "Recorded expense");
    Ok(Json(expense))
}

/// PUT /api/expenses/:id - Full overwrite of an existing expense
///
/// The creation timestamp is preserved; everything else comes from the
/// request body.
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(new): Json<NewExpense>,
) -> Result<Json<Expense>, AppError> {
    new.validate()?;

    let existing = state
        .db
        .get_expense(&id)?
        .ok_or_else(|| AppError::not_found("Expense not found"))?;

    let expense = Expense {
        id,
        amount: new.amount,
        date: new.date,
        what_for: new.what_for,
        category: new.category,
        payment_method: new.payment_method,
        remarks: new.remarks,
        created_at: existing.created_at,
    };

    state.db.update_expense(&expense)?;
    Ok(Json(expense))
}

/// DELETE /api/expenses/:id - Remove an expense (idempotent)
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_expense(&id)?;
    Ok(Json(SuccessResponse { success: true }))
}
