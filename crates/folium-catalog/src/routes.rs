//! HTTP surface of the catalog service.
//!
//! Three routes, all read-only:
//! - `GET /api/projects`: the full collection as a JSON array
//! - `GET /healthz`: service liveness and collection size
//! - `GET /files/*`: static assets (resume download, project images)
//!
//! Cross-origin access is granted to exactly one configured origin, GET
//! only; the browser frontend is the sole intended caller. Everything else
//! falls through to the transport's own 404.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::header::HeaderValue;
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use folium_core::Project;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::{Error, Result};

/// Shared handler state. Cheap to clone; the catalog itself is behind an
/// `Arc` and immutable.
#[derive(Clone)]
pub struct AppState {
    /// The served collection.
    pub catalog: Arc<Catalog>,
    /// Process start, for the health report.
    pub started_at: Instant,
}

/// The bare route table, state not yet attached.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/healthz", get(healthz))
}

/// Builds the complete application: routes, static-file mount, CORS, and
/// request tracing, with state attached.
///
/// Fails only when the configured origin is not a valid header value.
pub fn app(config: &CatalogConfig, catalog: Arc<Catalog>) -> Result<Router> {
    let origin: HeaderValue = config
        .cors
        .allowed_origin
        .parse()
        .map_err(|_| {
            Error::config(format!(
                "invalid cors.allowed_origin: {:?}",
                config.cors.allowed_origin
            ))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]);

    let state = AppState {
        catalog,
        started_at: Instant::now(),
    };

    Ok(router()
        .nest_service("/files", ServeDir::new(&config.assets.dir))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/projects`: every record, in catalog order.
///
/// Infallible while the process runs: the collection was validated at
/// startup and never changes, so two calls yield identical bodies.
async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    debug!(count = state.catalog.len(), "Listing projects");
    Json(state.catalog.projects().to_vec())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    projects: usize,
    uptime_seconds: u64,
}

/// `GET /healthz`: liveness plus collection size.
async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("health check");
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        projects: state.catalog.len(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

// ============================================================================
// Tests
// ============================================================================
