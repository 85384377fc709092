//! Car booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Default source tag for car booking submissions
pub const CAR_BOOKING_SOURCE: &str = "Car Booking Page";

/// Car booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarBooking {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub pickup: String,
    #[serde(rename = "drop")]
    pub drop_location: String,
    #[serde(rename = "date")]
    pub travel_date: String,
    pub vehicle_type: String,
    /// Which page the submission came from
    pub source: String,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Car booking form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarBooking {
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
    #[validate(length(min = 1, message = "vehicleType must not be empty"))]
    pub vehicle_type: String,
    pub source: Option<String>,
    pub status: Option<String>,
}

impl CreateCarBooking {
    /// Status to store, defaulting to "New"
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(super::STATUS_NEW)
    }

    /// Source to store, defaulting to the car booking page
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(CAR_BOOKING_SOURCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> CreateCarBooking {
        CreateCarBooking {
            name: "A".to_string(),
            phone: "1".to_string(),
            pickup: "X".to_string(),
            drop_location: "Y".to_string(),
            travel_date: "2024-01-01".to_string(),
            vehicle_type: "Sedan".to_string(),
            source: None,
            status: None,
        }
    }

    #[test]
    fn defaults_are_applied() {
        let data = booking();
        assert_eq!(data.status(), "New");
        assert_eq!(data.source(), "Car Booking Page");
    }

    #[test]
    fn every_field_is_required() {
        for field in ["name", "phone", "pickup", "drop", "date", "vehicleType"] {
            let mut payload = serde_json::json!({
                "name": "A",
                "phone": "1",
                "pickup": "X",
                "drop": "Y",
                "date": "2024-01-01",
                "vehicleType": "Sedan"
            });
            payload.as_object_mut().expect("object").remove(field);
            assert!(
                serde_json::from_value::<CreateCarBooking>(payload).is_err(),
                "payload without {} should be rejected",
                field
            );
        }
    }

    #[test]
    fn vehicle_type_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(booking()).expect("serialize");
        assert!(json.get("vehicleType").is_some());
        assert!(json.get("vehicle_type").is_none());
    }
}
