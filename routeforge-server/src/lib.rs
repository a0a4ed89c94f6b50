//! HTTP API and command line front end for the routing engine
//!
//! - `GET /health`
//! - `GET /v1/strategies`
//! - `POST /v1/routes`
//! - `POST /v1/routes/compare`
//!
//! Engine calls are CPU bound and run on the blocking thread pool.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use axum::{
    BoxError, Router, error_handling::HandleErrorLayer, response::IntoResponse, routing::get,
};
use routeforge::RouteCalculationService;
use routeforge_core::EngineConfig;
use tower::{ServiceBuilder, limit::ConcurrencyLimitLayer, timeout::TimeoutLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{ConfigError, ServerConfig, ServerSection};
pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    service: RouteCalculationService,
}

impl AppState {
    pub fn new(service: RouteCalculationService) -> Self {
        Self { service }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the engine configuration is invalid
    pub fn from_engine_config(config: &EngineConfig) -> Result<Self, routeforge_core::Error> {
        RouteCalculationService::with_defaults(config).map(Self::new)
    }

    pub fn service(&self) -> &RouteCalculationService {
        &self.service
    }
}

/// Router with default limits
pub fn app(state: AppState) -> Router {
    app_with(state, &ServerSection::default())
}

pub fn app_with(state: AppState, settings: &ServerSection) -> Router {
    let api = routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(settings.request_timeout()))
                .layer(ConcurrencyLimitLayer::new(
                    settings.max_concurrent_requests.max(1),
                )),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(routes::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn handle_middleware_error(err: BoxError) -> axum::response::Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout.into_response()
    } else {
        AppError::Internal(err.to_string()).into_response()
    }
}
