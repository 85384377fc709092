//! Promotional offer repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::offer::{CreateOffer, Offer},
};

#[derive(Clone)]
pub struct OffersRepository {
    pool: Pool<Postgres>,
}

impl OffersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Replace whatever offers exist with a single active one. Runs inside
    /// a transaction so readers never observe the window between the delete
    /// and the insert.
    pub async fn replace(&self, data: &CreateOffer) -> AppResult<Offer> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM offers").execute(&mut *tx).await?;

        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (title, image, delay, is_active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.image)
        .bind(data.delay())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(offer)
    }

    /// Fetch the active offer, if any
    pub async fn find_active(&self) -> AppResult<Option<Offer>> {
        let offer =
            sqlx::query_as::<_, Offer>("SELECT * FROM offers WHERE is_active = TRUE LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(offer)
    }
}
