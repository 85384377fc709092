//! Health check endpoint

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TestResponse {
    pub message: String,
}

/// API health check
#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = TestResponse)
    )
)]
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend API is running successfully!".to_string(),
    })
}
