//! Export snapshots for expenses
//!
//! Two textual formats, both sorted most-recent-first like the list
//! view:
//! - JSON: pretty-printed array of full records
//! - CSV: the original client's download format (string fields quoted,
//!   amounts bare)

use csv::{QuoteStyle, WriterBuilder};

use crate::db::Database;
use crate::error::{Error, Result};

/// CSV header row - kept unquoted to match the original export format
const CSV_HEADER: &str = "Date,Amount,What For,Category,Payment Method,Remarks";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// Serialize all expenses as a pretty-printed JSON array
pub fn export_json(db: &Database) -> Result<String> {
    let expenses = db.list_expenses()?;
    Ok(serde_json::to_string_pretty(&expenses)?)
}

/// Serialize all expenses as CSV
///
/// One row per expense; string fields are quoted, the amount stays a
/// bare number. Missing remarks become an empty quoted field.
pub fn export_csv(db: &Database) -> Result<String> {
    let expenses = db.list_expenses()?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .has_headers(false)
        .from_writer(Vec::new());

    for expense in &expenses {
        writer.write_record([
            expense.date.as_str(),
            &expense.amount.to_string(),
            expense.what_for.as_str(),
            expense.category.as_str(),
            expense.payment_method.as_str(),
            expense.remarks.as_deref().unwrap_or(""),
        ])?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| Error::InvalidData(format!("CSV buffer error: {}", e)))?;
    let rows = String::from_utf8(rows)
        .map_err(|e| Error::InvalidData(format!("CSV encoding error: {}", e)))?;

    Ok(format!("{}\n{}", CSV_HEADER, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewExpense, PaymentMethod};

    fn seed(db: &Database) {
        db.add_expense(&NewExpense {
            amount: 500.0,
            date: "2023-02-01".into(),
            what_for: "Team lunch".into(),
            category: Category::Food,
            payment_method: PaymentMethod::Upi,
            remarks: Some("with colleagues".into()),
        })
        .unwrap();
        db.add_expense(&NewExpense {
            amount: 120.5,
            date: "2023-01-15".into(),
            what_for: "Bus pass".into(),
            category: Category::Transport,
            payment_method: PaymentMethod::Cash,
            remarks: None,
        })
        .unwrap();
    }

    #[test]
    fn test_csv_header_is_exact() {
        let db = Database::in_memory().unwrap();
        let csv = export_csv(&db).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "Date,Amount,What For,Category,Payment Method,Remarks"
        );
    }

    #[test]
    fn test_csv_rows_sorted_and_quoted() {
        let db = Database::in_memory().unwrap();
        seed(&db);

        let csv = export_csv(&db).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        // Most recent date first; strings quoted, amount bare
        assert_eq!(
            lines[1],
            r#""2023-02-01",500,"Team lunch","Food","UPI","with colleagues""#
        );
        assert_eq!(lines[2], r#""2023-01-15",120.5,"Bus pass","Transport","Cash","""#);
    }

    #[test]
    fn test_json_is_pretty_array() {
        let db = Database::in_memory().unwrap();
        seed(&db);

        let json = export_json(&db).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["whatFor"], "Team lunch");
        // Pretty-printed, not a single line
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_empty_store_exports() {
        let db = Database::in_memory().unwrap();
        assert_eq!(export_json(&db).unwrap(), "[]");
        let csv = export_csv(&db).unwrap();
        assert_eq!(csv.trim_end(), "Date,Amount,What For,Category,Payment Method,Remarks");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
