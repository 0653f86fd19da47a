//! Expense operations

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{Expense, NewExpense};

impl Database {
    /// Insert a new expense, assigning a fresh identifier and creation
    /// timestamp. Returns the persisted record.
    pub fn add_expense(&self, new: &NewExpense) -> Result<Expense> {
        new.validate()?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount: new.amount,
            date: new.date.clone(),
            what_for: new.what_for.clone(),
            category: new.category,
            payment_method: new.payment_method,
            remarks: new.remarks.clone(),
            created_at: Utc::now(),
        };

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (id, data) VALUES (?, ?)",
            params![expense.id, serde_json::to_string(&expense)?],
        )?;

        Ok(expense)
    }

    /// Fetch a single expense by identifier
    pub fn get_expense(&self, id: &str) -> Result<Option<Expense>> {
        let conn = self.conn()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM expenses WHERE id = ?",
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// List every expense, most recent date first
    ///
    /// The backing store has no ordering guarantee; records are read in
    /// full and sorted here. Unparseable dates sort last; ties keep
    /// their scan order (the sort is stable).
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT data FROM expenses")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(serde_json::from_str::<Expense>(&row?)?);
        }

        expenses.sort_by(|a, b| date_sort_key(&b.date).cmp(&date_sort_key(&a.date)));
        Ok(expenses)
    }

    /// Full overwrite of an existing expense by identifier
    pub fn update_expense(&self, expense: &Expense) -> Result<()> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE expenses SET data = ? WHERE id = ?",
            params![serde_json::to_string(expense)?, expense.id],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(format!("Expense {}", expense.id)));
        }
        Ok(())
    }

    /// Remove an expense; removing a missing identifier is not an error
    pub fn delete_expense(&self, id: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        Ok(())
    }

    /// Wipe the expense namespace
    pub fn clear_expenses(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM expenses", [])?;
        Ok(())
    }
}

/// Sort key for an ISO-8601 date string
///
/// Accepts a full RFC 3339 timestamp or a bare YYYY-MM-DD date.
/// Returns None for anything else so unparseable dates order last
/// in the descending sort.
fn date_sort_key(date: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PaymentMethod};

    fn sample(what_for: &str, date: &str) -> NewExpense {
        NewExpense {
            amount: 100.0,
            date: date.into(),
            what_for: what_for.into(),
            category: Category::Food,
            payment_method: PaymentMethod::Cash,
            remarks: None,
        }
    }

    #[test]
    fn test_add_and_list_round_trip() {
        let db = Database::in_memory().unwrap();
        let created = db.add_expense(&sample("Test Expense", "2023-01-01")).unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.amount, 100.0);

        let all = db.list_expenses().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].what_for, "Test Expense");
        assert_eq!(all[0].category, Category::Food);
        assert_eq!(all[0].created_at, created.created_at);
    }

    #[test]
    fn test_ids_are_unique() {
        let db = Database::in_memory().unwrap();
        let a = db.add_expense(&sample("a", "2023-01-01")).unwrap();
        let b = db.add_expense(&sample("b", "2023-01-01")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let db = Database::in_memory().unwrap();
        let mut bad = sample("", "2023-01-01");
        assert!(matches!(
            db.add_expense(&bad),
            Err(Error::InvalidData(_))
        ));
        bad.what_for = "ok".into();
        bad.amount = -1.0;
        assert!(db.add_expense(&bad).is_err());
        assert!(db.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_list_sorted_by_date_descending() {
        let db = Database::in_memory().unwrap();
        db.add_expense(&sample("older", "2023-01-01")).unwrap();
        db.add_expense(&sample("newest", "2023-03-15")).unwrap();
        db.add_expense(&sample("middle", "2023-02-10")).unwrap();

        let all = db.list_expenses().unwrap();
        let names: Vec<_> = all.iter().map(|e| e.what_for.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle", "older"]);
    }

    #[test]
    fn test_list_unparseable_dates_sort_last() {
        let db = Database::in_memory().unwrap();
        db.add_expense(&sample("garbled", "not-a-date")).unwrap();
        db.add_expense(&sample("dated", "2023-01-01")).unwrap();

        let all = db.list_expenses().unwrap();
        assert_eq!(all[0].what_for, "dated");
        assert_eq!(all[1].what_for, "garbled");
    }

    #[test]
    fn test_list_empty_store() {
        let db = Database::in_memory().unwrap();
        assert!(db.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let db = Database::in_memory().unwrap();
        let created = db.add_expense(&sample("Delete Me", "2023-01-02")).unwrap();

        db.delete_expense(&created.id).unwrap();
        assert!(db.list_expenses().unwrap().is_empty());

        // Deleting again is not an error
        db.delete_expense(&created.id).unwrap();
        db.delete_expense("no-such-id").unwrap();
    }

    #[test]
    fn test_update_overwrites_record() {
        let db = Database::in_memory().unwrap();
        let mut expense = db.add_expense(&sample("groceries run", "2023-01-05")).unwrap();

        expense.amount = 250.0;
        expense.category = Category::Groceries;
        db.update_expense(&expense).unwrap();

        let fetched = db.get_expense(&expense.id).unwrap().unwrap();
        assert_eq!(fetched.amount, 250.0);
        assert_eq!(fetched.category, Category::Groceries);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let db = Database::in_memory().unwrap();
        let expense = Expense {
            id: "ghost".into(),
            amount: 10.0,
            date: "2023-01-01".into(),
            what_for: "phantom".into(),
            category: Category::Others,
            payment_method: PaymentMethod::Other,
            remarks: None,
            created_at: Utc::now(),
        };
        assert!(matches!(
            db.update_expense(&expense),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_clear_expenses() {
        let db = Database::in_memory().unwrap();
        db.add_expense(&sample("a", "2023-01-01")).unwrap();
        db.add_expense(&sample("b", "2023-01-02")).unwrap();
        db.clear_expenses().unwrap();
        assert!(db.list_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_date_sort_key_formats() {
        assert!(date_sort_key("2023-01-01").is_some());
        assert!(date_sort_key("2023-01-01T10:30:00Z").is_some());
        assert!(date_sort_key("yesterday").is_none());
        assert!(date_sort_key("2023-01-01T10:30:00Z") > date_sort_key("2023-01-01"));
    }
}
