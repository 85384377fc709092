//! Promotional offer service

use validator::Validate;

use crate::{
    error::AppResult,
    models::offer::{CreateOffer, Offer},
    repository::Repository,
};

#[derive(Clone)]
pub struct OffersService {
    repository: Repository,
}

impl OffersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Set the promotional offer, replacing any previous one. Exactly one
    /// active offer exists afterwards.
    pub async fn set_offer(&self, data: &CreateOffer) -> AppResult<Offer> {
        data.validate()?;
        self.repository.offers.replace(data).await
    }

    /// The offer currently shown to visitors, if any
    pub async fn active_offer(&self) -> AppResult<Option<Offer>> {
        self.repository.offers.find_active().await
    }
}
