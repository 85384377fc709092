//! Trip Connection Booking Server
//!
//! REST JSON backend for a travel-agency website: tour, car and bus booking
//! submissions, contact messages, the package catalog and the promotional
//! popup offer, plus the typed site client consuming that API.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
