//! Trip Connection Server - Travel Agency Booking Backend

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripconnect_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "tripconnect_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trip Connection Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS: browsers are restricted to the configured origins; requests
    // without an Origin header (curl, server-to-server) pass untouched.
    let origins: Vec<HeaderValue> = state
        .config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/test", get(api::health::test))
        // Tour bookings
        .route("/bookings", post(api::tour_bookings::create_booking))
        .route("/admin/bookings", get(api::tour_bookings::list_bookings))
        .route(
            "/admin/bookings/:id",
            delete(api::tour_bookings::delete_booking),
        )
        // Contact messages
        .route("/contact", post(api::contacts::create_contact))
        .route("/admin/contacts", get(api::contacts::list_contacts))
        // Package catalog
        .route("/packages", get(api::packages::list_packages))
        .route("/admin/packages", post(api::packages::create_package))
        .route(
            "/admin/packages/:id",
            delete(api::packages::delete_package),
        )
        // Car bookings
        .route(
            "/car-booking",
            post(api::car_bookings::create_car_booking),
        )
        .route(
            "/admin/car-bookings",
            get(api::car_bookings::list_car_bookings),
        )
        .route(
            "/admin/car-bookings/:id",
            delete(api::car_bookings::delete_car_booking),
        )
        // Bus bookings
        .route(
            "/bus-booking",
            post(api::bus_bookings::create_bus_booking),
        )
        .route(
            "/admin/bus-bookings",
            get(api::bus_bookings::list_bus_bookings),
        )
        .route(
            "/admin/bus-bookings/:id",
            delete(api::bus_bookings::delete_bus_booking),
        )
        // Promotional offer
        .route("/admin/offer", post(api::offers::set_offer))
        .route("/offer", get(api::offers::get_offer))
        // Admin dashboard
        .route(
            "/admin/dashboard-counts",
            get(api::dashboard::dashboard_counts),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
