//! Site-facing client
//!
//! Typed access to the HTTP API for the public website, plus the two pieces
//! of presentation logic the site relies on: the one-time promotional popup
//! and the package catalog view.

pub mod api;
pub mod catalog;
pub mod popup;

pub use api::SiteClient;
