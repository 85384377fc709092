//! Package catalog model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Catalog entry for a tour package. No field is enforced as required;
/// the admin form is trusted to fill in what the cards need.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    /// Comma-separated list of covered places
    pub places: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Package creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub places: Option<String>,
    pub image: Option<String>,
}
