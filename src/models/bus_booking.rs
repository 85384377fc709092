//! Bus booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Default source tag for bus booking submissions
pub const BUS_BOOKING_SOURCE: &str = "Bus Booking Page";

/// Bus booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusBooking {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub pickup: String,
    #[serde(rename = "drop")]
    pub drop_location: String,
    #[serde(rename = "date")]
    pub travel_date: String,
    /// Which page the submission came from
    pub source: String,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Bus booking form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusBooking {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "pickup must not be empty"))]
    pub pickup: String,
    #[serde(rename = "drop")]
    #[validate(length(min = 1, message = "drop must not be empty"))]
    pub drop_location: String,
    #[serde(rename = "date")]
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub travel_date: String,
    pub source: Option<String>,
    pub status: Option<String>,
}

impl CreateBusBooking {
    /// Status to store, defaulting to "New"
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(super::STATUS_NEW)
    }

    /// Source to store, defaulting to the bus booking page
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(BUS_BOOKING_SOURCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> CreateBusBooking {
        CreateBusBooking {
            name: "Ravi".to_string(),
            phone: "8000000000".to_string(),
            pickup: "Pune".to_string(),
            drop_location: "Nashik".to_string(),
            travel_date: "2024-02-10".to_string(),
            source: None,
            status: None,
        }
    }

    #[test]
    fn defaults_are_applied() {
        let data = booking();
        assert_eq!(data.status(), "New");
        assert_eq!(data.source(), "Bus Booking Page");
    }

    #[test]
    fn blank_pickup_fails_validation() {
        let mut data = booking();
        data.pickup = String::new();
        assert!(data.validate().is_err());
    }
}
