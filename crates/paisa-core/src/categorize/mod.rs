//! Expense categorization
//!
//! Given a free-text description and an amount, decide on one category.
//! When an API key is available the remote classifier is consulted;
//! the ordered keyword table serves as both the no-credential path and
//! the recovery path for every remote failure, so `categorize` never
//! surfaces an error to the caller.

mod keywords;
mod parsing;
mod remote;

pub use remote::RemoteClassifier;

use tracing::{debug, warn};

use crate::models::CategorySuggestion;

/// Environment variable overriding the remote classifier base URL
pub const CLASSIFIER_URL_ENV: &str = "PAISA_CLASSIFIER_URL";

/// Stateless categorization helper
///
/// Owns no persistent state; the result is a pure function of the
/// inputs, the fixed keyword table, and (when a key is supplied) the
/// remote classifier's answer.
#[derive(Clone)]
pub struct Categorizer {
    remote: RemoteClassifier,
}

impl Categorizer {
    /// Create a categorizer against the default remote endpoint
    pub fn new() -> Self {
        Self {
            remote: RemoteClassifier::new(remote::DEFAULT_BASE_URL),
        }
    }

    /// Create a categorizer against a specific chat-completions host
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            remote: RemoteClassifier::new(base_url),
        }
    }

    /// Create from the environment, honoring `PAISA_CLASSIFIER_URL`
    pub fn from_env() -> Self {
        match std::env::var(CLASSIFIER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    /// Categorize an expense description
    ///
    /// Never fails: with no API key the keyword table answers directly,
    /// and every remote failure (transport, status, unparseable body)
    /// is logged and recovered through the same table.
    pub async fn categorize(
        &self,
        description: &str,
        amount: f64,
        api_key: Option<&str>,
    ) -> CategorySuggestion {
        let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
            debug!("No API key configured, using keyword fallback");
            return keywords::fallback(description);
        };

        match self.remote.classify(description, amount, key).await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                warn!(error = %e, "Remote categorization failed, using keyword fallback");
                keywords::fallback(description)
            }
        }
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}
