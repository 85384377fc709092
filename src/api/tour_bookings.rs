//! Tour booking endpoints

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
    models::tour_booking::{CreateTourBooking, TourBooking},
};

use super::SuccessResponse;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TourBookingCreated {
    pub success: bool,
    pub booking: TourBooking,
}

/// Submit a tour booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateTourBooking,
    responses(
        (status = 201, description = "Booking stored", body = TourBookingCreated),
        (status = 400, description = "Invalid submission", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateTourBooking>, AppError>,
) -> AppResult<(StatusCode, Json<TourBookingCreated>)> {
    let booking = state.services.tour_bookings.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(TourBookingCreated {
            success: true,
            booking,
        }),
    ))
}

/// List tour bookings, newest first
#[utoipa::path(
    get,
    path = "/admin/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "Tour bookings", body = Vec<TourBooking>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<TourBooking>>> {
    let bookings = state.services.tour_bookings.list().await?;
    Ok(Json(bookings))
}

/// Delete a tour booking
#[utoipa::path(
    delete,
    path = "/admin/bookings/{id}",
    tag = "bookings",
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted (or already absent)", body = SuccessResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.tour_bookings.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
