//! Tour bookings repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::tour_booking::{CreateTourBooking, TourBooking},
};

#[derive(Clone)]
pub struct TourBookingsRepository {
    pool: Pool<Postgres>,
}

impl TourBookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a tour booking, applying the status default
    pub async fn create(&self, data: &CreateTourBooking) -> AppResult<TourBooking> {
        let row = sqlx::query_as::<_, TourBooking>(
            r#"
            INSERT INTO tour_bookings (name, phone, pickup, drop_location, travel_date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.pickup)
        .bind(&data.drop_location)
        .bind(&data.travel_date)
        .bind(data.status())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all tour bookings, newest first
    pub async fn list(&self) -> AppResult<Vec<TourBooking>> {
        let rows = sqlx::query_as::<_, TourBooking>(
            "SELECT * FROM tour_bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete a tour booking. Deleting an unknown id is not an error:
    /// the admin page fires deletes without checking existence first.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM tour_bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count bookings still awaiting follow-up. Rows predating the status
    /// column carry NULL and must stay actionable.
    pub async fn count_actionable(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tour_bookings WHERE status = 'New' OR status IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
