//! SmartCart route optimizer service.
//!
//! Run with: cargo run -p smartcart-service
//! Reads `smartcart.toml` from the working directory when present.

use std::sync::Arc;

use smartcart::{ConfigError, SmartCartConfig};
use smartcart_service::{api, console};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

const CONFIG_PATH: &str = "smartcart.toml";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    console::init();

    let config = match SmartCartConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => SmartCartConfig::default(),
        Err(e) => {
            warn!(event = "config_rejected", path = CONFIG_PATH, error = %e);
            SmartCartConfig::default()
        }
    };
    let address = config.server.bind_address();

    let state = Arc::new(api::AppState::new(config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    console::print_listening(&address);
    axum::serve(listener, app).await
}
