//! Bus booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::bus_booking::{BusBooking, CreateBusBooking},
};

use super::SuccessResponse;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusBookingCreated {
    pub success: bool,
    pub bus_booking: BusBooking,
}

/// Submit a bus booking
#[utoipa::path(
    post,
    path = "/bus-booking",
    tag = "bus-bookings",
    request_body = CreateBusBooking,
    responses(
        (status = 201, description = "Booking stored", body = BusBookingCreated),
        (status = 400, description = "Invalid submission", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_bus_booking(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateBusBooking>, AppError>,
) -> AppResult<(StatusCode, Json<BusBookingCreated>)> {
    let bus_booking = state.services.bus_bookings.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(BusBookingCreated {
            success: true,
            bus_booking,
        }),
    ))
}

/// List bus bookings, newest first
#[utoipa::path(
    get,
    path = "/admin/bus-bookings",
    tag = "bus-bookings",
    responses(
        (status = 200, description = "Bus bookings", body = Vec<BusBooking>)
    )
)]
pub async fn list_bus_bookings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BusBooking>>> {
    let bookings = state.services.bus_bookings.list().await?;
    Ok(Json(bookings))
}

/// Delete a bus booking
#[utoipa::path(
    delete,
    path = "/admin/bus-bookings/{id}",
    tag = "bus-bookings",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted (or already absent)", body = SuccessResponse)
    )
)]
pub async fn delete_bus_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.bus_bookings.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
