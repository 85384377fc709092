//! Contact message model
//!
//! Contact forms vary across pages, so the submitted fields are stored
//! verbatim as a JSON document rather than a fixed schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Contact message record. The free-form fields are flattened so the wire
/// shape matches the submitted document plus `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    #[sqlx(json)]
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
