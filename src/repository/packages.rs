//! Package catalog repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::package::{CreatePackage, Package},
};

#[derive(Clone)]
pub struct PackagesRepository {
    pool: Pool<Postgres>,
}

impl PackagesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a catalog entry
    pub async fn create(&self, data: &CreatePackage) -> AppResult<Package> {
        let row = sqlx::query_as::<_, Package>(
            r#"
            INSERT INTO packages (title, category, price, duration, places, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.category)
        .bind(data.price)
        .bind(&data.duration)
        .bind(&data.places)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List the catalog in insertion order
    pub async fn list(&self) -> AppResult<Vec<Package>> {
        let rows = sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Delete a catalog entry. Unknown ids succeed silently.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Total number of catalog entries
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM packages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
