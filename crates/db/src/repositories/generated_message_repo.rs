//! Repository for the `generated_messages` table.

use sqlx::PgPool;

use outreach_core::message::MessageStatus;
use outreach_core::types::DbId;

use crate::models::generated_message::GeneratedMessage;

/// Column list for generated_messages queries.
const COLUMNS: &str = "id, lead_id, content, status, created_at";

/// Provides create/list operations for generated messages.
///
/// Messages are only ever created as `Draft`; no update or delete path
/// exists.
pub struct GeneratedMessageRepo;

impl GeneratedMessageRepo {
    /// Persist a freshly generated draft for a lead, returning the row.
    pub async fn create(
        pool: &PgPool,
        lead_id: DbId,
        content: &str,
    ) -> Result<GeneratedMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_messages (lead_id, content, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedMessage>(&query)
            .bind(lead_id)
            .bind(content)
            .bind(MessageStatus::Draft.as_str())
            .fetch_one(pool)
            .await
    }

    /// List all messages for a lead, oldest first.
    pub async fn list_by_lead(
        pool: &PgPool,
        lead_id: DbId,
    ) -> Result<Vec<GeneratedMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_messages
             WHERE lead_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, GeneratedMessage>(&query)
            .bind(lead_id)
            .fetch_all(pool)
            .await
    }
}
