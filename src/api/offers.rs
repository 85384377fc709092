//! Promotional offer endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::offer::{CreateOffer, Offer},
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct OfferCreated {
    pub success: bool,
    pub offer: Offer,
}

/// Set the promotional offer, replacing any existing one
#[utoipa::path(
    post,
    path = "/admin/offer",
    tag = "offers",
    request_body = CreateOffer,
    responses(
        (status = 200, description = "Offer replaced", body = OfferCreated),
        (status = 400, description = "Invalid offer", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_offer(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateOffer>, AppError>,
) -> AppResult<Json<OfferCreated>> {
    let offer = state.services.offers.set_offer(&data).await?;
    Ok(Json(OfferCreated {
        success: true,
        offer,
    }))
}

/// Get the active offer; null when none is set
#[utoipa::path(
    get,
    path = "/offer",
    tag = "offers",
    responses(
        (status = 200, description = "Active offer, or null when none is set", body = Offer)
    )
)]
pub async fn get_offer(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Option<Offer>>> {
    let offer = state.services.offers.active_offer().await?;
    Ok(Json(offer))
}
