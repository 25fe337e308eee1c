//! REST handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use smartcart::{plan_route, Coordinate, SmartCartConfig, StoreLayout, DEFAULT_LAYOUT_NAME};

/// Shared, read-only state for every request.
#[derive(Debug, Default)]
pub struct AppState {
    config: SmartCartConfig,
}

impl AppState {
    pub fn new(config: SmartCartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmartCartConfig {
        &self.config
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/sections", get(sections))
        .route("/api/optimize", post(optimize))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Debug, Serialize)]
struct SectionInfo {
    items: &'static [&'static str],
    coordinates: Coordinate,
}

#[derive(Debug, Serialize)]
struct SectionsResponse {
    sections: BTreeMap<&'static str, SectionInfo>,
    supported_items: &'static [&'static str],
}

async fn sections() -> Json<SectionsResponse> {
    let layout = StoreLayout::walmart_default();
    let sections = layout
        .sections()
        .iter()
        .map(|section| {
            (
                section.name,
                SectionInfo {
                    items: section.items,
                    coordinates: section.coordinate,
                },
            )
        })
        .collect();
    Json(SectionsResponse {
        sections,
        supported_items: layout.supported_items(),
    })
}

/// Body of `POST /api/optimize`.
#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub shopping_list: Option<Vec<String>>,
    pub store_layout: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

async fn optimize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Missing shopping list"),
    };
    let Some(items) = request.shopping_list else {
        return error_response(StatusCode::BAD_REQUEST, "Missing shopping list");
    };

    let layout_name = request.store_layout.as_deref().unwrap_or(DEFAULT_LAYOUT_NAME);
    let layout = StoreLayout::by_name(layout_name).unwrap_or_else(|| {
        warn!(
            event = "unknown_layout",
            layout = layout_name,
            fallback = DEFAULT_LAYOUT_NAME,
        );
        StoreLayout::walmart_default()
    });

    info!(event = "optimize_request", items = items.len(), layout = layout.name());

    let config = state.config.clone();
    let outcome = tokio::task::spawn_blocking(move || plan_route(layout, &items, &config)).await;

    match outcome {
        Ok(Ok(plan)) => Json(plan).into_response(),
        Ok(Err(e)) if e.is_validation() => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Ok(Err(e)) => {
            warn!(event = "optimize_failed", error = %e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Optimization failed: {e}"),
            )
        }
        Err(e) => {
            warn!(event = "optimize_panicked", error = %e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Optimization failed: {e}"),
            )
        }
    }
}
