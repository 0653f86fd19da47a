//! JSON parsing for classifier responses
//!
//! Model output often wraps the JSON payload in commentary; these
//! helpers pull out the first well-formed brace-delimited object and
//! normalize missing fields to their documented defaults.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Category, CategorySuggestion};

/// Raw classifier payload before normalization
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    suggested_action: Option<String>,
}

/// Parse a category suggestion out of free-form model text
///
/// Missing `category` defaults to Others (as does an unrecognized
/// category name, since the enumeration is closed), missing
/// `confidence` to 0.8 (out-of-range values are clamped to 0.0-1.0),
/// missing `explanation` to a generic string.
pub fn parse_suggestion(response: &str) -> Result<CategorySuggestion> {
    let json_str = extract_json_object(response).ok_or_else(|| {
        Error::InvalidData(format!(
            "No JSON found in classifier response | Raw: {}",
            truncate(response, 200)
        ))
    })?;

    let raw: RawSuggestion = serde_json::from_str(json_str).map_err(|e| {
        Error::InvalidData(format!(
            "Invalid JSON from classifier: {} | Raw: {}",
            e,
            truncate(json_str, 200)
        ))
    })?;

    Ok(CategorySuggestion {
        category: raw
            .category
            .and_then(|s| s.parse().ok())
            .unwrap_or(Category::Others),
        confidence: raw.confidence.unwrap_or(0.8).clamp(0.0, 1.0),
        explanation: raw
            .explanation
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Categorized by AI".to_string()),
        suggested_action: raw.suggested_action,
    })
}

/// Find the first brace-delimited JSON object by matching brace depth
fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let mut depth = 0;

    for (i, c) in response[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..=start + i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Cut a string to at most `limit` bytes, backing up to a char boundary
fn truncate(s: &str, limit: usize) -> String {
    if s.len() <= limit {
        return s.to_string();
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
