//! Tour booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Tour booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourBooking {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub pickup: Option<String>,
    #[serde(rename = "drop")]
    pub drop_location: Option<String>,
    #[serde(rename = "date")]
    pub travel_date: Option<String>,
    /// Absent on records predating the status field; those count as actionable
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Tour booking form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourBooking {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    pub pickup: Option<String>,
    #[serde(rename = "drop")]
    pub drop_location: Option<String>,
    #[serde(rename = "date")]
    pub travel_date: Option<String>,
    pub status: Option<String>,
}

impl CreateTourBooking {
    /// Status to store, defaulting to "New"
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(super::STATUS_NEW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> CreateTourBooking {
        CreateTourBooking {
            name: "Asha".to_string(),
            phone: "9000000000".to_string(),
            pickup: Some("Mumbai".to_string()),
            drop_location: Some("Goa".to_string()),
            travel_date: Some("2024-05-01".to_string()),
            status: None,
        }
    }

    #[test]
    fn status_defaults_to_new() {
        assert_eq!(booking().status(), "New");
    }

    #[test]
    fn explicit_status_is_kept() {
        let mut data = booking();
        data.status = Some("Contacted".to_string());
        assert_eq!(data.status(), "Contacted");
    }

    #[test]
    fn empty_name_fails_validation() {
        let mut data = booking();
        data.name = String::new();
        assert!(data.validate().is_err());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let data: CreateTourBooking =
            serde_json::from_value(serde_json::json!({ "name": "Asha", "phone": "9000000000" }))
                .expect("minimal payload should deserialize");
        assert!(data.validate().is_ok());
        assert!(data.pickup.is_none());
    }

    #[test]
    fn wire_names_use_drop_and_date() {
        let data: CreateTourBooking = serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "phone": "9000000000",
            "drop": "Goa",
            "date": "2024-05-01"
        }))
        .expect("payload should deserialize");
        assert_eq!(data.drop_location.as_deref(), Some("Goa"));
        assert_eq!(data.travel_date.as_deref(), Some("2024-05-01"));
    }
}
