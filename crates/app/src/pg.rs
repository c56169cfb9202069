//! PostgreSQL-backed implementation of [`LeadStore`].

use async_trait::async_trait;

use outreach_core::types::DbId;
use outreach_db::models::generated_message::GeneratedMessage;
use outreach_db::models::lead::{CreateLead, Lead, UpdateLead};
use outreach_db::repositories::{GeneratedMessageRepo, LeadRepo};
use outreach_db::DbPool;

use crate::store::{LeadStore, StoreError};

/// Record store backed by the PostgreSQL pool.
///
/// Constructed once at process start around a shared [`DbPool`]; no
/// teardown needed beyond process exit.
#[derive(Clone)]
pub struct PgLeadStore {
    pool: DbPool,
}

impl PgLeadStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database error");
        StoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert_lead(&self, input: &CreateLead) -> Result<Lead, StoreError> {
        Ok(LeadRepo::create(&self.pool, input).await?)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(LeadRepo::list(&self.pool).await?)
    }

    async fn update_lead(&self, id: DbId, input: &UpdateLead) -> Result<Lead, StoreError> {
        LeadRepo::update(&self.pool, id, input)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert_message(
        &self,
        lead_id: DbId,
        content: &str,
    ) -> Result<GeneratedMessage, StoreError> {
        Ok(GeneratedMessageRepo::create(&self.pool, lead_id, content).await?)
    }

    async fn list_messages(&self, lead_id: DbId) -> Result<Vec<GeneratedMessage>, StoreError> {
        Ok(GeneratedMessageRepo::list_by_lead(&self.pool, lead_id).await?)
    }
}
