use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tidybook::config::AppConfig;
use tidybook::db;
use tidybook::handlers;
use tidybook::services::addresses::HttpAddressProvider;
use tidybook::services::availability::HttpAvailabilityProvider;
use tidybook::services::bookings::HttpBookingEndpoint;
use tidybook::services::catalog::HttpCatalogProvider;
use tidybook::services::payments::PaystackGateway;
use tidybook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    anyhow::ensure!(
        !config.paystack_secret_key.is_empty(),
        "PAYSTACK_SECRET_KEY must be set"
    );

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        catalog: Box::new(HttpCatalogProvider::new(config.platform_api_url.clone())),
        addresses: Box::new(HttpAddressProvider::new(config.platform_api_url.clone())),
        availability: Box::new(HttpAvailabilityProvider::new(
            config.platform_api_url.clone(),
        )),
        bookings: Box::new(HttpBookingEndpoint::new(config.platform_api_url.clone())),
        payments: Box::new(PaystackGateway::new(
            config.paystack_secret_key.clone(),
            config.paystack_base_url.clone(),
        )),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/wizard", post(handlers::wizard::start_wizard))
        .route(
            "/api/wizard/:session",
            get(handlers::wizard::get_wizard).delete(handlers::wizard::abandon),
        )
        .route("/api/wizard/:session/form", post(handlers::wizard::update_form))
        .route("/api/wizard/:session/next", post(handlers::wizard::next_step))
        .route("/api/wizard/:session/prev", post(handlers::wizard::prev_step))
        .route("/api/wizard/:session/goto", post(handlers::wizard::go_to_step))
        .route("/api/wizard/:session/panel", get(handlers::wizard::panel))
        .route(
            "/api/wizard/:session/addresses",
            post(handlers::wizard::create_address),
        )
        .route(
            "/api/wizard/:session/checkout",
            post(handlers::checkout::run_checkout).get(handlers::checkout::get_checkout),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
