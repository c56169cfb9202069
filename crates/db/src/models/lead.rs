//! Lead model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use outreach_core::types::{DbId, Timestamp};

/// A row from the `leads` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub linkedin_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new lead.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub role: String,
    pub company: String,
    pub linkedin_url: Option<String>,
}

/// DTO for a full overwrite of a lead's mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLead {
    pub name: String,
    pub role: String,
    pub company: String,
    pub linkedin_url: Option<String>,
}
