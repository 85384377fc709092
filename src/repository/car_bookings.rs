//! Car bookings repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::car_booking::{CarBooking, CreateCarBooking},
};

#[derive(Clone)]
pub struct CarBookingsRepository {
    pool: Pool<Postgres>,
}

impl CarBookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a car booking, applying the status and source defaults
    pub async fn create(&self, data: &CreateCarBooking) -> AppResult<CarBooking> {
        let row = sqlx::query_as::<_, CarBooking>(
            r#"
            INSERT INTO car_bookings
                (name, phone, pickup, drop_location, travel_date, vehicle_type, source, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.pickup)
        .bind(&data.drop_location)
        .bind(&data.travel_date)
        .bind(&data.vehicle_type)
        .bind(data.source())
        .bind(data.status())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all car bookings, newest first
    pub async fn list(&self) -> AppResult<Vec<CarBooking>> {
        let rows = sqlx::query_as::<_, CarBooking>(
            "SELECT * FROM car_bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete a car booking. Unknown ids succeed silently.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM car_bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count bookings still awaiting follow-up (NULL status included)
    pub async fn count_actionable(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM car_bookings WHERE status = 'New' OR status IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
