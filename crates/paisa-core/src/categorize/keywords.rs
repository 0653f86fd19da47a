//! Local keyword matcher
//!
//! Deterministic, offline categorization fallback. The table is an
//! ordered sequence scanned front to back; the first keyword found as
//! a substring of the lower-cased description wins, so definition
//! order is part of the observable contract.

use crate::models::{Category, CategorySuggestion};

/// Confidence assigned to a keyword match
const MATCH_CONFIDENCE: f64 = 0.75;

/// Confidence assigned to the no-match default
const DEFAULT_CONFIDENCE: f64 = 0.3;

#[rustfmt::skip]
const KEYWORD_TABLE: &[(&str, Category)] = &[
    ("food", Category::Food), ("lunch", Category::Food), ("dinner", Category::Food),
    ("breakfast", Category::Food), ("restaurant", Category::Food), ("cafe", Category::Food),
    ("biryani", Category::Food), ("pizza", Category::Food), ("burger", Category::Food),
    ("coffee", Category::Food), ("tea", Category::Food), ("snack", Category::Food),
    ("groceries", Category::Groceries), ("vegetables", Category::Groceries),
    ("fruits", Category::Groceries), ("supermarket", Category::Groceries),
    ("milk", Category::Groceries), ("eggs", Category::Groceries), ("bread", Category::Groceries),
    ("uber", Category::Transport), ("ola", Category::Transport), ("taxi", Category::Transport),
    ("bus", Category::Transport), ("train", Category::Transport), ("fuel", Category::Transport),
    ("petrol", Category::Transport), ("diesel", Category::Transport),
    ("metro", Category::Transport), ("auto", Category::Transport),
    ("rickshaw", Category::Transport),
    ("electricity", Category::Utilities), ("water", Category::Utilities),
    ("gas", Category::Utilities), ("internet", Category::Utilities),
    ("bill", Category::Utilities), ("wifi", Category::Utilities),
    ("broadband", Category::Utilities),
    ("movie", Category::Entertainment), ("cinema", Category::Entertainment),
    ("netflix", Category::Subscriptions), ("spotify", Category::Subscriptions),
    ("prime", Category::Subscriptions), ("hotstar", Category::Subscriptions),
    ("youtube", Category::Subscriptions),
    ("medicine", Category::Health), ("doctor", Category::Health),
    ("pharmacy", Category::Health), ("gym", Category::Health),
    ("hospital", Category::Health), ("clinic", Category::Health),
    ("rent", Category::Rent), ("house", Category::Rent), ("apartment", Category::Rent),
    ("book", Category::Education), ("course", Category::Education),
    ("tuition", Category::Education), ("school", Category::Education),
    ("college", Category::Education),
    ("amazon", Category::Shopping), ("flipkart", Category::Shopping),
    ("clothes", Category::Shopping), ("shoes", Category::Shopping),
    ("shopping", Category::Shopping),
];

/// Categorize by first-match-wins substring scan of the keyword table
pub fn fallback(description: &str) -> CategorySuggestion {
    let lower = description.to_lowercase();

    for (keyword, category) in KEYWORD_TABLE {
        if lower.contains(keyword) {
            return CategorySuggestion {
                category: *category,
                confidence: MATCH_CONFIDENCE,
                explanation: format!("Matched keyword '{}' in description.", keyword),
                suggested_action: None,
            };
        }
    }

    CategorySuggestion {
        category: Category::Others,
        confidence: DEFAULT_CONFIDENCE,
        explanation: "Could not confidently categorize, defaulted to Others.".into(),
        suggested_action: Some("Check if this fits a specific category.".into()),
    }
}
