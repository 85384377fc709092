//! Tour bookings service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::tour_booking::{CreateTourBooking, TourBooking},
    repository::Repository,
};

#[derive(Clone)]
pub struct TourBookingsService {
    repository: Repository,
}

impl TourBookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a tour booking submission
    pub async fn create(&self, data: &CreateTourBooking) -> AppResult<TourBooking> {
        data.validate()?;
        self.repository.tour_bookings.create(data).await
    }

    pub async fn list(&self) -> AppResult<Vec<TourBooking>> {
        self.repository.tour_bookings.list().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.tour_bookings.delete(id).await
    }
}
