//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    bus_bookings, car_bookings, contacts, dashboard, health, offers, packages, tour_bookings,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trip Connection API",
        version = "1.0.0",
        description = "Travel agency booking and catalog REST API",
        license(name = "MIT"),
        contact(name = "Trip Connection Team")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::test,
        // Tour bookings
        tour_bookings::create_booking,
        tour_bookings::list_bookings,
        tour_bookings::delete_booking,
        // Car bookings
        car_bookings::create_car_booking,
        car_bookings::list_car_bookings,
        car_bookings::delete_car_booking,
        // Bus bookings
        bus_bookings::create_bus_booking,
        bus_bookings::list_bus_bookings,
        bus_bookings::delete_bus_booking,
        // Contacts
        contacts::create_contact,
        contacts::list_contacts,
        // Packages
        packages::create_package,
        packages::list_packages,
        packages::delete_package,
        // Offer
        offers::set_offer,
        offers::get_offer,
        // Dashboard
        dashboard::dashboard_counts,
    ),
    components(
        schemas(
            // Tour bookings
            crate::models::tour_booking::TourBooking,
            crate::models::tour_booking::CreateTourBooking,
            tour_bookings::TourBookingCreated,
            // Car bookings
            crate::models::car_booking::CarBooking,
            crate::models::car_booking::CreateCarBooking,
            car_bookings::CarBookingCreated,
            // Bus bookings
            crate::models::bus_booking::BusBooking,
            crate::models::bus_booking::CreateBusBooking,
            bus_bookings::BusBookingCreated,
            // Contacts
            crate::models::contact::Contact,
            // Packages
            crate::models::package::Package,
            crate::models::package::CreatePackage,
            packages::PackageCreated,
            // Offer
            crate::models::offer::Offer,
            crate::models::offer::CreateOffer,
            offers::OfferCreated,
            // Dashboard
            dashboard::DashboardCounts,
            // Shared
            health::TestResponse,
            crate::api::SuccessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "bookings", description = "Tour booking submissions"),
        (name = "car-bookings", description = "Car booking submissions"),
        (name = "bus-bookings", description = "Bus booking submissions"),
        (name = "contacts", description = "Contact messages"),
        (name = "packages", description = "Package catalog"),
        (name = "offers", description = "Promotional popup offer"),
        (name = "dashboard", description = "Admin dashboard counters")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
