//! Data model types shared across the workspace
//!
//! The wire format (serde) uses the same camelCase field names and
//! display-cased enum values as the original web client, so exported
//! snapshots stay interchangeable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Expense category - a fixed closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Groceries,
    Transport,
    Utilities,
    Entertainment,
    Health,
    Subscriptions,
    Rent,
    Education,
    Shopping,
    Others,
}

impl Category {
    /// All categories in display order (used for prompt construction)
    pub const ALL: [Category; 11] = [
        Self::Food,
        Self::Groceries,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Health,
        Self::Subscriptions,
        Self::Rent,
        Self::Education,
        Self::Shopping,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Subscriptions => "Subscriptions",
            Self::Rent => "Rent",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Others => "Others",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "groceries" => Ok(Self::Groceries),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "subscriptions" => Ok(Self::Subscriptions),
            "rent" => Ok(Self::Rent),
            "education" => Ok(Self::Education),
            "shopping" => Ok(Self::Shopping),
            "others" => Ok(Self::Others),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method used for an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    Upi,
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Net Banking")]
    NetBanking,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::NetBanking => "Net Banking",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upi" => Ok(Self::Upi),
            "cash" => Ok(Self::Cash),
            "credit card" => Ok(Self::CreditCard),
            "debit card" => Ok(Self::DebitCard),
            "net banking" => Ok(Self::NetBanking),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown payment method: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded expense
///
/// `id` and `created_at` are assigned exactly once by the store at
/// insert time; callers never supply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    /// ISO-8601 date string, user-editable (distinct from created_at)
    pub date: String,
    pub what_for: String,
    pub category: Category,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A new expense before insertion (no id, no creation timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: f64,
    pub date: String,
    pub what_for: String,
    pub category: Category,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl NewExpense {
    /// Reject invalid submissions before any record is created
    pub fn validate(&self) -> Result<()> {
        if self.what_for.trim().is_empty() {
            return Err(Error::InvalidData("Description is required".into()));
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(Error::InvalidData("Amount must be positive".into()));
        }
        Ok(())
    }
}

/// Display currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

/// Remote classifier provider selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Groq,
    HuggingFace,
    Local,
}

/// UI theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Singleton application settings record
///
/// Lazily created with defaults on first read; fields absent from the
/// stored blob fall back to their defaults on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_api_key: Option<String>,
    #[serde(default)]
    pub llm_provider: LlmProvider,
    #[serde(default)]
    pub theme: Theme,
}

/// Partial settings update - omitted fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub currency: Option<Currency>,
    pub llm_api_key: Option<String>,
    pub llm_provider: Option<LlmProvider>,
    pub theme: Option<Theme>,
}

/// Result of a categorization call
///
/// Constructed fresh per call and merged into an Expense by the caller
/// at submission time; never persisted directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySuggestion {
    pub category: Category,
    /// 0.0 - 1.0 inclusive
    pub confidence: f64,
    pub explanation: String,
    /// Present only when confidence is low
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Aggregated spending for one calendar month
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// YYYY-MM
    pub month: String,
    pub total: f64,
    pub category_breakdown: std::collections::BTreeMap<String, f64>,
    pub payment_method_breakdown: std::collections::BTreeMap<String, f64>,
}
