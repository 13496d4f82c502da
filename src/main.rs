use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use pawdesk::config::AppConfig;
use pawdesk::handlers;
use pawdesk::services::calendar::GoogleCalendar;
use pawdesk::services::storage::rest::RestStorage;
use pawdesk::services::store::rest::RestStore;
use pawdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.store_url.is_empty() {
        tracing::warn!("STORE_URL is not set, database writes will fail");
    }
    if !config.google_service_account_email.is_empty() {
        tracing::info!("Google Calendar credentials configured");
    }

    let store = RestStore::new(config.store_url.clone(), config.store_key.clone());
    let storage = RestStorage::new(config.store_url.clone(), config.store_key.clone());
    let calendar = GoogleCalendar::new(
        config.google_service_account_email.clone(),
        config.google_private_key.clone(),
    );

    let state = Arc::new(AppState {
        store: Box::new(store),
        storage: Box::new(storage),
        calendar,
        config: config.clone(),
    });

    // `any` routing: only OPTIONS is special-cased inside the handlers,
    // every other method flows down the POST path.
    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", any(handlers::booking::create_booking))
        .route("/api/inquiries", any(handlers::inquiry::submit_inquiry))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
