//! Business logic services

pub mod bus_bookings;
pub mod car_bookings;
pub mod contacts;
pub mod dashboard;
pub mod offers;
pub mod packages;
pub mod tour_bookings;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub tour_bookings: tour_bookings::TourBookingsService,
    pub car_bookings: car_bookings::CarBookingsService,
    pub bus_bookings: bus_bookings::BusBookingsService,
    pub contacts: contacts::ContactsService,
    pub packages: packages::PackagesService,
    pub offers: offers::OffersService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            tour_bookings: tour_bookings::TourBookingsService::new(repository.clone()),
            car_bookings: car_bookings::CarBookingsService::new(repository.clone()),
            bus_bookings: bus_bookings::BusBookingsService::new(repository.clone()),
            contacts: contacts::ContactsService::new(repository.clone()),
            packages: packages::PackagesService::new(repository.clone()),
            offers: offers::OffersService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
