//! Remote classifier over the OpenAI-compatible chat completions API
//!
//! Works with any host implementing `/v1/chat/completions` (Groq by
//! default). Errors here are recovered by the caller's keyword
//! fallback and never reach the user.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parsing::parse_suggestion;
use crate::error::{Error, Result};
use crate::models::{Category, CategorySuggestion};

/// Default chat-completions host (Groq's OpenAI-compatible API)
pub(super) const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

/// Default model identifier
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const SYSTEM_PROMPT: &str =
    "You are a helpful expense categorization assistant. Always respond with valid JSON only.";

/// HTTP client for the remote classification call
#[derive(Clone)]
pub struct RemoteClassifier {
    http_client: Client,
    base_url: String,
    model: String,
}

impl RemoteClassifier {
    /// Create a classifier against a chat-completions host
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a new instance with a different model identifier
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            model: model.to_string(),
        }
    }

    /// Get the host URL (for logging)
    pub fn host(&self) -> &str {
        &self.base_url
    }

    /// Ask the remote model to categorize one expense
    pub async fn classify(
        &self,
        description: &str,
        amount: f64,
        api_key: &str,
    ) -> Result<CategorySuggestion> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(description, amount),
                },
            ],
            temperature: 0.1,
            max_tokens: 150,
        };

        debug!(host = %self.base_url, model = %self.model, "Calling remote classifier");

        let response = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::InvalidData(format!(
                "Classifier API error {}: {}",
                status, body
            )));
        }

        let chat_response: ChatCompletionResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::InvalidData("No choices in classifier response".into()))?;

        parse_suggestion(&content)
    }
}

/// Build the structured categorization prompt
fn build_prompt(description: &str, amount: f64) -> String {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();

    format!(
        "You are an intelligent expense categorization assistant. \
         Categorize the following expense into exactly one of these categories:\n\
         [{}]\n\n\
         Expense Description: \"{}\"\n\
         Amount: {}\n\n\
         Return ONLY a valid JSON object in this exact format (no markdown, no extra text):\n\
         {{\"category\": \"CategoryName\", \"confidence\": 0.95, \"explanation\": \"Brief reason\"}}",
        categories.join(", "),
        description,
        amount
    )
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completion response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}
