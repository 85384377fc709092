//! Admin dashboard aggregates

use crate::{api::dashboard::DashboardCounts, error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Collect the counters shown on the admin dashboard. The three booking
    /// counters only include actionable records (status "New" or missing);
    /// contacts and packages are unfiltered totals.
    pub async fn counts(&self) -> AppResult<DashboardCounts> {
        let tour_bookings = self.repository.tour_bookings.count_actionable().await?;
        let car_bookings = self.repository.car_bookings.count_actionable().await?;
        let bus_bookings = self.repository.bus_bookings.count_actionable().await?;
        let contacts = self.repository.contacts.count().await?;
        let packages = self.repository.packages.count().await?;

        Ok(DashboardCounts {
            tour_bookings,
            car_bookings,
            bus_bookings,
            contacts,
            packages,
            total_new_actionable: tour_bookings + car_bookings + bus_bookings,
        })
    }
}
