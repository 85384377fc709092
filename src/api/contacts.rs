//! Contact form endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::contact::Contact,
};

use super::SuccessResponse;

/// Submit a contact message. The body is stored as-is.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contacts",
    request_body = Object,
    responses(
        (status = 201, description = "Message stored", body = SuccessResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_contact(
    State(state): State<crate::AppState>,
    WithRejection(Json(fields), _): WithRejection<Json<serde_json::Value>, AppError>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    state.services.contacts.create(&fields).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/admin/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "Contact messages", body = Vec<Contact>)
    )
)]
pub async fn list_contacts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = state.services.contacts.list().await?;
    Ok(Json(contacts))
}
