//! HTTP implementation of [`MessageGenerator`] against the generation
//! proxy (`POST /api/generate`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::store::{GenerateError, MessageGenerator};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    name: &'a str,
    role: &'a str,
    company: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the server-side generation proxy.
///
/// Maps the proxy's 402 response to [`GenerateError::QuotaExhausted`]
/// and any other non-2xx response to [`GenerateError::Failed`].
#[derive(Clone)]
pub struct HttpMessageGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMessageGenerator {
    /// `base_url` is the proxy server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MessageGenerator for HttpMessageGenerator {
    async fn generate(
        &self,
        name: &str,
        role: &str,
        company: &str,
    ) -> Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                name,
                role,
                company,
            })
            .send()
            .await
            .map_err(|e| GenerateError::Failed(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(GenerateError::QuotaExhausted);
        }
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("Status {status}"));
            return Err(GenerateError::Failed(detail));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Failed(format!("Malformed response: {e}")))?;
        Ok(parsed.message)
    }
}
