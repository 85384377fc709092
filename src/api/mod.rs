//! API handlers for the Trip Connection REST endpoints
//!
//! Admin-prefixed routes carry no authentication, reproducing the system
//! being replaced; see DESIGN.md before exposing them publicly.

pub mod bus_bookings;
pub mod car_bookings;
pub mod contacts;
pub mod dashboard;
pub mod health;
pub mod offers;
pub mod openapi;
pub mod packages;
pub mod tour_bookings;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every delete endpoint and by bodiless creates.
/// A delete on an unknown id still reports success.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
