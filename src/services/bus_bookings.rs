//! Bus bookings service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::bus_booking::{BusBooking, CreateBusBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct BusBookingsService {
    repository: Repository,
}

impl BusBookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a bus booking submission
    pub async fn create(&self, data: &CreateBusBooking) -> AppResult<BusBooking> {
        data.validate()?;
        self.repository.bus_bookings.create(data).await
    }

    pub async fn list(&self) -> AppResult<Vec<BusBooking>> {
        self.repository.bus_bookings.list().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.bus_bookings.delete(id).await
    }
}
