//! Package catalog view
//!
//! Turns the result of a catalog fetch into what the page renders: one card
//! per package, an explicit empty state, or an inline error message.

use uuid::Uuid;

use crate::{error::AppError, models::package::Package};

/// One rendered catalog card
#[derive(Debug, Clone, PartialEq)]
pub struct PackageCard {
    pub id: Uuid,
    pub title: String,
    pub duration: String,
    pub price: Option<f64>,
    pub image: Option<String>,
    /// Detail page link keyed by the package id
    pub detail_url: String,
}

/// What the catalog section of the page shows
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Cards(Vec<PackageCard>),
    /// Successful fetch, zero packages
    Empty,
    /// Fetch failed; the message is shown inline
    Error(String),
}

/// Build the catalog view from a fetch result
pub fn render(result: Result<Vec<Package>, AppError>) -> CatalogView {
    match result {
        Ok(packages) if packages.is_empty() => CatalogView::Empty,
        Ok(packages) => CatalogView::Cards(packages.into_iter().map(card).collect()),
        Err(e) => CatalogView::Error(format!("Could not load packages: {}", e)),
    }
}

fn card(pkg: Package) -> PackageCard {
    PackageCard {
        detail_url: format!("/package.html?id={}", pkg.id),
        id: pkg.id,
        title: pkg.title.unwrap_or_else(|| "Untitled package".to_string()),
        duration: pkg.duration.unwrap_or_default(),
        price: pkg.price,
        image: pkg.image,
    }
}
