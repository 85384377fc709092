//! Bus bookings repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::bus_booking::{BusBooking, CreateBusBooking},
};

#[derive(Clone)]
pub struct BusBookingsRepository {
    pool: Pool<Postgres>,
}

impl BusBookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a bus booking, applying the status and source defaults
    pub async fn create(&self, data: &CreateBusBooking) -> AppResult<BusBooking> {
        let row = sqlx::query_as::<_, BusBooking>(
            r#"
            INSERT INTO bus_bookings
                (name, phone, pickup, drop_location, travel_date, source, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.pickup)
        .bind(&data.drop_location)
        .bind(&data.travel_date)
        .bind(data.source())
        .bind(data.status())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all bus bookings, newest first
    pub async fn list(&self) -> AppResult<Vec<BusBooking>> {
        let rows = sqlx::query_as::<_, BusBooking>(
            "SELECT * FROM bus_bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete a bus booking. Unknown ids succeed silently.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM bus_bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count bookings still awaiting follow-up (NULL status included)
    pub async fn count_actionable(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bus_bookings WHERE status = 'New' OR status IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
