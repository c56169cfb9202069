//! Handler for the generation proxy.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use outreach_core::lead::validate_lead_fields;
use outreach_core::prompt::outreach_prompt;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/generate`.
///
/// Fields default to empty strings so a missing field is rejected by
/// validation with a 400 rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
}

/// Response body for a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: String,
}

/// POST /api/generate
///
/// Render the lead's fields into the outreach prompt, forward it to the
/// completion service, and return the reply verbatim. Quota exhaustion
/// maps to 402, anything else to 500 with a fixed message.
pub async fn generate_message(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    validate_lead_fields(&input.name, &input.role, &input.company)
        .map_err(AppError::Validation)?;

    let prompt = outreach_prompt(&input.name, &input.role, &input.company);
    let message = state.completion.complete(prompt).await?;

    tracing::info!(
        name = %input.name,
        company = %input.company,
        chars = message.len(),
        "Generated outreach message"
    );

    Ok(Json(GenerateResponse { message }))
}
