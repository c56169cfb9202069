//! Capability traits for the controller's collaborators.
//!
//! The backend record store and the message generator are consumed
//! purely through these traits; the controller never sees sqlx or HTTP
//! types.

use async_trait::async_trait;

use outreach_core::types::DbId;
use outreach_db::models::generated_message::GeneratedMessage;
use outreach_db::models::lead::{CreateLead, Lead, UpdateLead};

/// Errors from the backend record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Lead not found: {0}")]
    NotFound(DbId),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Errors from the message generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The generation service's quota is exhausted.
    #[error("Generation quota exhausted")]
    QuotaExhausted,

    /// Any other generation failure.
    #[error("Generation failed: {0}")]
    Failed(String),
}

/// Record store over the `leads` and `generated_messages` collections.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Insert a new lead, returning the stored row.
    async fn insert_lead(&self, input: &CreateLead) -> Result<Lead, StoreError>;

    /// Fetch all leads. No pagination.
    async fn list_leads(&self) -> Result<Vec<Lead>, StoreError>;

    /// Overwrite a lead's mutable fields, returning the updated row.
    async fn update_lead(&self, id: DbId, input: &UpdateLead) -> Result<Lead, StoreError>;

    /// Persist a generated draft for a lead.
    async fn insert_message(
        &self,
        lead_id: DbId,
        content: &str,
    ) -> Result<GeneratedMessage, StoreError>;

    /// Fetch all messages for a lead.
    async fn list_messages(&self, lead_id: DbId) -> Result<Vec<GeneratedMessage>, StoreError>;
}

/// Text-generation capability for outreach drafts.
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Produce an outreach message for the given lead fields.
    async fn generate(
        &self,
        name: &str,
        role: &str,
        company: &str,
    ) -> Result<String, GenerateError>;
}
