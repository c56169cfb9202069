//! Repository for the `leads` table.

use sqlx::PgPool;

use outreach_core::types::DbId;

use crate::models::lead::{CreateLead, Lead, UpdateLead};

/// Column list for leads queries.
const COLUMNS: &str = "id, name, role, company, linkedin_url, created_at";

/// Provides CRUD operations for leads. Leads are never deleted.
pub struct LeadRepo;

impl LeadRepo {
    /// Create a new lead, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, role, company, linkedin_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.linkedin_url)
            .fetch_one(pool)
            .await
    }

    /// List all leads, oldest first. No pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at ASC");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// Find a lead by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a lead's mutable fields, returning the updated row.
    ///
    /// This is a full overwrite (last write wins); there is no version
    /// column and no conflict detection.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                name = $2,
                role = $3,
                company = $4,
                linkedin_url = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.company)
            .bind(&input.linkedin_url)
            .fetch_optional(pool)
            .await
    }
}
