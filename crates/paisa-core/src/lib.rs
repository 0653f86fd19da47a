//! Paisa Core Library
//!
//! Shared functionality for the paisa expense tracker:
//! - Key-value persistence for expenses and app settings (SQLite-backed)
//! - Expense categorization (remote classifier with keyword fallback)
//! - Debounced trigger helper for as-you-type categorization
//! - JSON/CSV export snapshots
//! - Monthly spending reports

pub mod categorize;
pub mod db;
pub mod debounce;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;

/// Test utilities including a mock chat-completions server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use categorize::Categorizer;
pub use db::Database;
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use models::{
    AppSettings, Category, CategorySuggestion, Currency, Expense, LlmProvider, MonthlyReport,
    NewExpense, PaymentMethod, SettingsUpdate, Theme,
};
