//! Promotional popup offer model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Seconds to wait before showing the popup when the admin sets none
pub const DEFAULT_POPUP_DELAY: i32 = 10;

/// Promotional offer shown as a one-time popup on the public site.
/// At most one offer is active at any time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    /// Seconds to wait after page load before showing the popup
    pub delay: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Offer creation request. Setting an offer replaces whatever was active.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOffer {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
    pub delay: Option<i32>,
}

impl CreateOffer {
    /// Popup delay to store, in seconds
    pub fn delay(&self) -> i32 {
        self.delay.unwrap_or(DEFAULT_POPUP_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_defaults_to_ten_seconds() {
        let offer = CreateOffer {
            title: "Monsoon sale".to_string(),
            image: "/img/monsoon.jpg".to_string(),
            delay: None,
        };
        assert_eq!(offer.delay(), 10);
    }

    #[test]
    fn explicit_delay_is_kept() {
        let offer = CreateOffer {
            title: "Monsoon sale".to_string(),
            image: "/img/monsoon.jpg".to_string(),
            delay: Some(3),
        };
        assert_eq!(offer.delay(), 3);
    }

    #[test]
    fn is_active_uses_camel_case_on_the_wire() {
        let offer = Offer {
            id: Uuid::nil(),
            title: "Monsoon sale".to_string(),
            image: "/img/monsoon.jpg".to_string(),
            delay: 10,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&offer).expect("serialize");
        assert_eq!(json["isActive"], serde_json::Value::Bool(true));
    }
}
