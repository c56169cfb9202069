//! Client for the chat-completions collaborator.
//!
//! Sends a single user-role message with a bounded output-token budget
//! and returns the first choice's text. Quota exhaustion is classified
//! separately so the proxy can surface it as a distinct condition.

use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;

/// Errors from the completion call.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The caller's quota with the completion service is exhausted.
    #[error("Completion quota exhausted")]
    QuotaExhausted,

    /// Any other failure: network, non-2xx status, malformed body.
    #[error("Completion service error: {0}")]
    Service(String),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Reusable handle for the chat-completions API.
///
/// Constructed once at process start and shared via [`AppState`](crate::state::AppState).
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl CompletionClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Submit a single-user-message completion and return its text.
    ///
    /// Returns an empty string when the service responds successfully
    /// but without content. No retries; the server-wide request timeout
    /// bounds the call.
    pub async fn complete(&self, prompt: String) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Service(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error_body(status.as_u16(), &body));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Service(format!("Malformed response: {e}")))?;

        Ok(parsed
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}

/// Classify a non-2xx completion response.
///
/// The OpenAI API reports quota exhaustion as an error object with code
/// `insufficient_quota`; match on the code field or, failing that, on
/// the raw body text.
fn classify_error_body(status: u16, body: &str) -> CompletionError {
    let code = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("code"))
                .and_then(|c| c.as_str())
                .map(str::to_string)
        });

    if code.as_deref() == Some("insufficient_quota") || body.contains("insufficient_quota") {
        return CompletionError::QuotaExhausted;
    }

    CompletionError::Service(format!("Status {status}: {body}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn quota_code_classified_as_quota_exhausted() {
        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#;
        assert_matches!(
            classify_error_body(429, body),
            CompletionError::QuotaExhausted
        );
    }

    #[test]
    fn quota_mentioned_in_plain_body_classified_as_quota_exhausted() {
        assert_matches!(
            classify_error_body(429, "insufficient_quota"),
            CompletionError::QuotaExhausted
        );
    }

    #[test]
    fn plain_rate_limit_is_a_service_error() {
        let body = r#"{"error":{"message":"Rate limit reached","code":"rate_limit_exceeded"}}"#;
        assert_matches!(classify_error_body(429, body), CompletionError::Service(_));
    }

    #[test]
    fn server_error_is_a_service_error() {
        let err = classify_error_body(500, "upstream exploded");
        assert_matches!(err, CompletionError::Service(msg) if msg.contains("500"));
    }

    #[test]
    fn unparseable_body_is_a_service_error() {
        assert_matches!(
            classify_error_body(503, "<html>bad gateway</html>"),
            CompletionError::Service(_)
        );
    }
}
