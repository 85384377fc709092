//! Contact messages repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::contact::Contact};

#[derive(Clone)]
pub struct ContactsRepository {
    pool: Pool<Postgres>,
}

impl ContactsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Store a contact submission verbatim
    pub async fn create(&self, fields: &serde_json::Value) -> AppResult<Contact> {
        let row = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (fields) VALUES ($1) RETURNING *",
        )
        .bind(fields)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all contact messages, newest first
    pub async fn list(&self) -> AppResult<Vec<Contact>> {
        let rows =
            sqlx::query_as::<_, Contact>("SELECT * FROM contacts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Total number of contact messages
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
