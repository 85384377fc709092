//! Car bookings service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::car_booking::{CarBooking, CreateCarBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct CarBookingsService {
    repository: Repository,
}

impl CarBookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a car booking submission
    pub async fn create(&self, data: &CreateCarBooking) -> AppResult<CarBooking> {
        data.validate()?;
        self.repository.car_bookings.create(data).await
    }

    pub async fn list(&self) -> AppResult<Vec<CarBooking>> {
        self.repository.car_bookings.list().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.car_bookings.delete(id).await
    }
}
