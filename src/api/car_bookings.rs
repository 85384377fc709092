//! Car booking endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::car_booking::{CarBooking, CreateCarBooking},
};

use super::SuccessResponse;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarBookingCreated {
    pub success: bool,
    pub car_booking: CarBooking,
}

/// Submit a car booking
#[utoipa::path(
    post,
    path = "/car-booking",
    tag = "car-bookings",
    request_body = CreateCarBooking,
    responses(
        (status = 200, description = "Booking stored", body = CarBookingCreated),
        (status = 400, description = "Invalid submission", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_car_booking(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateCarBooking>, AppError>,
) -> AppResult<Json<CarBookingCreated>> {
    let car_booking = state.services.car_bookings.create(&data).await?;
    Ok(Json(CarBookingCreated {
        success: true,
        car_booking,
    }))
}

/// List car bookings, newest first
#[utoipa::path(
    get,
    path = "/admin/car-bookings",
    tag = "car-bookings",
    responses(
        (status = 200, description = "Car bookings", body = Vec<CarBooking>)
    )
)]
pub async fn list_car_bookings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<CarBooking>>> {
    let bookings = state.services.car_bookings.list().await?;
    Ok(Json(bookings))
}

/// Delete a car booking
#[utoipa::path(
    delete,
    path = "/admin/car-bookings/{id}",
    tag = "car-bookings",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted (or already absent)", body = SuccessResponse)
    )
)]
pub async fn delete_car_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.car_bookings.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
