//! Package catalog endpoints

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
    models::package::{CreatePackage, Package},
};

use super::SuccessResponse;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PackageCreated {
    pub success: bool,
    /// Field name kept from the original admin client
    pub pkg: Package,
}

/// Create a catalog entry
#[utoipa::path(
    post,
    path = "/admin/packages",
    tag = "packages",
    request_body = CreatePackage,
    responses(
        (status = 200, description = "Package stored", body = PackageCreated)
    )
)]
pub async fn create_package(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreatePackage>, AppError>,
) -> AppResult<Json<PackageCreated>> {
    let pkg = state.services.packages.create(&data).await?;
    Ok(Json(PackageCreated { success: true, pkg }))
}

/// List the package catalog
#[utoipa::path(
    get,
    path = "/packages",
    tag = "packages",
    responses(
        (status = 200, description = "Catalog entries", body = Vec<Package>)
    )
)]
pub async fn list_packages(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Package>>> {
    let packages = state.services.packages.list().await?;
    Ok(Json(packages))
}

/// Delete a catalog entry
#[utoipa::path(
    delete,
    path = "/admin/packages/{id}",
    tag = "packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package deleted (or already absent)", body = SuccessResponse)
    )
)]
pub async fn delete_package(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.packages.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
