//! Repository layer for database operations

pub mod bus_bookings;
pub mod car_bookings;
pub mod contacts;
pub mod offers;
pub mod packages;
pub mod tour_bookings;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub tour_bookings: tour_bookings::TourBookingsRepository,
    pub car_bookings: car_bookings::CarBookingsRepository,
    pub bus_bookings: bus_bookings::BusBookingsRepository,
    pub contacts: contacts::ContactsRepository,
    pub packages: packages::PackagesRepository,
    pub offers: offers::OffersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            tour_bookings: tour_bookings::TourBookingsRepository::new(pool.clone()),
            car_bookings: car_bookings::CarBookingsRepository::new(pool.clone()),
            bus_bookings: bus_bookings::BusBookingsRepository::new(pool.clone()),
            contacts: contacts::ContactsRepository::new(pool.clone()),
            packages: packages::PackagesRepository::new(pool.clone()),
            offers: offers::OffersRepository::new(pool.clone()),
            pool,
        }
    }
}
