//! Monthly spending reports
//!
//! Backs the breakdown views: expenses bucketed by calendar month
//! (the YYYY-MM prefix of the date field) with per-category and
//! per-payment-method totals. Computation only; rendering belongs to
//! the client.

use std::collections::BTreeMap;

use crate::db::Database;
use crate::error::Result;
use crate::models::MonthlyReport;

/// Aggregate all expenses into per-month reports, newest month first
pub fn monthly_reports(db: &Database) -> Result<Vec<MonthlyReport>> {
    let expenses = db.list_expenses()?;

    let mut months: BTreeMap<String, MonthlyReport> = BTreeMap::new();

    for expense in &expenses {
        let month = expense.date.get(0..7).unwrap_or(&expense.date).to_string();
        let report = months.entry(month.clone()).or_insert_with(|| MonthlyReport {
            month,
            total: 0.0,
            category_breakdown: BTreeMap::new(),
            payment_method_breakdown: BTreeMap::new(),
        });

        report.total += expense.amount;
        *report
            .category_breakdown
            .entry(expense.category.as_str().to_string())
            .or_insert(0.0) += expense.amount;
        *report
            .payment_method_breakdown
            .entry(expense.payment_method.as_str().to_string())
            .or_insert(0.0) += expense.amount;
    }

    // BTreeMap iterates months ascending; YYYY-MM sorts chronologically
    Ok(months.into_values().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewExpense, PaymentMethod};

    fn add(db: &Database, date: &str, amount: f64, category: Category, pm: PaymentMethod) {
        db.add_expense(&NewExpense {
            amount,
            date: date.into(),
            what_for: "x".into(),
            category,
            payment_method: pm,
            remarks: None,
        })
        .unwrap();
    }

    #[test]
    fn test_buckets_by_month_newest_first() {
        let db = Database::in_memory().unwrap();
        add(&db, "2023-01-10", 100.0, Category::Food, PaymentMethod::Upi);
        add(&db, "2023-02-05", 200.0, Category::Rent, PaymentMethod::Cash);
        add(&db, "2023-01-20", 50.0, Category::Food, PaymentMethod::Upi);

        let reports = monthly_reports(&db).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].month, "2023-02");
        assert_eq!(reports[0].total, 200.0);
        assert_eq!(reports[1].month, "2023-01");
        assert_eq!(reports[1].total, 150.0);
    }

    #[test]
    fn test_category_and_payment_breakdowns() {
        let db = Database::in_memory().unwrap();
        add(&db, "2023-03-01", 100.0, Category::Food, PaymentMethod::Upi);
        add(&db, "2023-03-02", 40.0, Category::Food, PaymentMethod::Cash);
        add(&db, "2023-03-03", 300.0, Category::Utilities, PaymentMethod::Upi);

        let reports = monthly_reports(&db).unwrap();
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.total, 440.0);
        assert_eq!(report.category_breakdown["Food"], 140.0);
        assert_eq!(report.category_breakdown["Utilities"], 300.0);
        assert_eq!(report.payment_method_breakdown["UPI"], 400.0);
        assert_eq!(report.payment_method_breakdown["Cash"], 40.0);
    }

    #[test]
    fn test_empty_store_yields_no_reports() {
        let db = Database::in_memory().unwrap();
        assert!(monthly_reports(&db).unwrap().is_empty());
    }
}
