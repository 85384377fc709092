//! Typed HTTP client for the Trip Connection API

use crate::{
    api::{
        bus_bookings::BusBookingCreated, car_bookings::CarBookingCreated,
        tour_bookings::TourBookingCreated,
    },
    error::AppResult,
    models::{
        bus_booking::{BusBooking, CreateBusBooking},
        car_booking::{CarBooking, CreateCarBooking},
        offer::Offer,
        package::Package,
        tour_booking::{CreateTourBooking, TourBooking},
    },
};

/// Client used by the public site to talk to the booking API
#[derive(Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: String,
}

impl SiteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the active promotional offer; None when no offer is set
    pub async fn active_offer(&self) -> AppResult<Option<Offer>> {
        let response = self
            .http
            .get(format!("{}/api/offer", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the package catalog
    pub async fn packages(&self) -> AppResult<Vec<Package>> {
        let response = self
            .http
            .get(format!("{}/api/packages", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Submit a tour booking form
    pub async fn submit_tour_booking(&self, data: &CreateTourBooking) -> AppResult<TourBooking> {
        let response = self
            .http
            .post(format!("{}/api/bookings", self.base_url))
            .json(data)
            .send()
            .await?
            .error_for_status()?;
        let created: TourBookingCreated = response.json().await?;
        Ok(created.booking)
    }

    /// Submit a car booking form
    pub async fn submit_car_booking(&self, data: &CreateCarBooking) -> AppResult<CarBooking> {
        let response = self
            .http
            .post(format!("{}/api/car-booking", self.base_url))
            .json(data)
            .send()
            .await?
            .error_for_status()?;
        let created: CarBookingCreated = response.json().await?;
        Ok(created.car_booking)
    }

    /// Submit a bus booking form
    pub async fn submit_bus_booking(&self, data: &CreateBusBooking) -> AppResult<BusBooking> {
        let response = self
            .http
            .post(format!("{}/api/bus-booking", self.base_url))
            .json(data)
            .send()
            .await?
            .error_for_status()?;
        let created: BusBookingCreated = response.json().await?;
        Ok(created.bus_booking)
    }

    /// Submit a contact form with whatever fields the page collected
    pub async fn send_contact(&self, fields: &serde_json::Value) -> AppResult<()> {
        self.http
            .post(format!("{}/api/contact", self.base_url))
            .json(fields)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
