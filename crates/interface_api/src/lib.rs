//! HTTP API Layer
//!
//! This crate exposes the link lifecycle service over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One module per resource (links, health)
//! - **DTOs**: Request/response data transfer objects
//! - **Error handling**: Domain errors mapped to consistent JSON responses
//!
//! The settlement webhook trusts its caller; verifying processor signatures
//! is the job of the integration layer in front of this service.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_links::LifecycleService;

use crate::config::ApiConfig;
use crate::handlers::{health, links};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: LifecycleService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The shared lifecycle service
/// * `config` - API configuration
pub fn create_router(service: LifecycleService, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let link_routes = Router::new()
        .route("/", post(links::create_link))
        .route("/", get(links::list_links))
        .route("/summary", get(links::link_summary))
        .route("/:id", get(links::get_link))
        .route("/:id/cancel", post(links::cancel_link));

    let webhook_routes = Router::new().route("/settlement", post(links::settlement_webhook));

    let api_routes = Router::new()
        .nest("/links", link_routes)
        .nest("/webhooks", webhook_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
