//! Data models

pub mod bus_booking;
pub mod car_booking;
pub mod contact;
pub mod offer;
pub mod package;
pub mod tour_booking;

/// Status assigned to every freshly submitted booking
pub const STATUS_NEW: &str = "New";
