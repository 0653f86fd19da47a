//! Test utilities
//!
//! A mock chat-completions server for exercising the remote classifier
//! without network access. Enabled through the `test-utils` feature so
//! downstream crates can use it in their integration tests.

use axum::extract::{Json, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Canned reply the mock server returns for every request
#[derive(Clone)]
pub enum MockReply {
    /// Well-formed completion whose message content is this string
    Content(String),
    /// Error status with a plain-text body
    ErrorStatus(u16),
    /// 200 response whose body is not valid JSON
    NotJson,
}

/// Mock OpenAI-compatible chat server for tests
pub struct MockChatServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockChatServer {
    /// Start the mock server on an available port
    pub async fn start(reply: MockReply) -> Self {
        let app = Router::new()
            .route("/v1/chat/completions", post(handle_chat))
            .with_state(reply);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockChatServer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn handle_chat(
    State(reply): State<MockReply>,
    Json(request): Json<ChatRequest>,
) -> Response {
    match reply {
        MockReply::Content(content) => Json(ChatResponse {
            model: request.model,
            choices: vec![Choice {
                message: Message {
                    role: "assistant".to_string(),
                    content,
                },
            }],
        })
        .into_response(),
        MockReply::ErrorStatus(code) => {
            let status =
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "mock upstream error").into_response()
        }
        MockReply::NotJson => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "this is not json",
        )
            .into_response(),
    }
}

// Request/response types for the mock server

#[derive(Debug, Deserialize)]
struct ChatRequest {
    model: String,
    #[allow(dead_code)]
    messages: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    model: String,
    choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::RemoteClassifier;

    #[tokio::test]
    async fn test_mock_server_returns_configured_content() {
        let mut server = MockChatServer::start(MockReply::Content(
            r#"{"category": "Food", "confidence": 0.9, "explanation": "test"}"#.into(),
        ))
        .await;

        let classifier = RemoteClassifier::new(&server.url());
        let result = classifier.classify("lunch", 100.0, "test-key").await.unwrap();
        assert_eq!(result.explanation, "test");
        server.stop();
    }

    #[tokio::test]
    async fn test_mock_server_error_status() {
        let mut server = MockChatServer::start(MockReply::ErrorStatus(429)).await;

        let classifier = RemoteClassifier::new(&server.url());
        let err = classifier.classify("lunch", 100.0, "test-key").await.unwrap_err();
        assert!(err.to_string().contains("429"));
        server.stop();
    }

    #[tokio::test]
    async fn test_mock_server_not_json_body() {
        let mut server = MockChatServer::start(MockReply::NotJson).await;

        let classifier = RemoteClassifier::new(&server.url());
        assert!(classifier.classify("lunch", 100.0, "test-key").await.is_err());
        server.stop();
    }
}
