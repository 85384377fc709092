//! Admin dashboard endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

/// Counters shown on the admin dashboard
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    /// Tour bookings with status "New" or no status at all
    pub tour_bookings: i64,
    /// Car bookings with status "New" or no status at all
    pub car_bookings: i64,
    /// Bus bookings with status "New" or no status at all
    pub bus_bookings: i64,
    /// All contact messages
    pub contacts: i64,
    /// All catalog entries
    pub packages: i64,
    /// Sum of the three actionable booking counters
    pub total_new_actionable: i64,
}

/// Get dashboard counters
#[utoipa::path(
    get,
    path = "/admin/dashboard-counts",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardCounts)
    )
)]
pub async fn dashboard_counts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardCounts>> {
    let counts = state.services.dashboard.counts().await?;
    Ok(Json(counts))
}
