//! Generated message model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use outreach_core::message::MessageStatus;
use outreach_core::types::{DbId, Timestamp};

/// A row from the `generated_messages` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct GeneratedMessage {
    pub id: DbId,
    pub lead_id: DbId,
    pub content: String,
    #[sqlx(try_from = "String")]
    pub status: MessageStatus,
    pub created_at: Timestamp,
}
