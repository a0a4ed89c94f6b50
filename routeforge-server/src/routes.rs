use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use routeforge::RouteSummary;
use routeforge_core::model::RouteRequest;

use crate::{
    AppState,
    dto::{ComparisonResponse, RouteRequestDto, StrategiesResponse},
    error::AppError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/strategies", get(list_strategies))
        .route("/v1/routes", post(calculate_route))
        .route("/v1/routes/compare", post(compare_routes))
}

pub async fn health() -> &'static str {
    "ok"
}

async fn list_strategies(State(state): State<AppState>) -> Json<StrategiesResponse> {
    let strategies = state
        .service()
        .available()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(StrategiesResponse { strategies })
}

/// One summary when `strategy` is given, otherwise the full comparison
async fn calculate_route(
    State(state): State<AppState>,
    payload: Result<Json<RouteRequestDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(dto) = payload?;
    let request = dto.to_request()?;
    match dto.strategy {
        Some(strategy) => {
            let summary = run_single(&state, strategy, request).await?;
            Ok(Json(summary).into_response())
        }
        None => Ok(Json(run_comparison(&state, request).await?).into_response()),
    }
}

async fn compare_routes(
    State(state): State<AppState>,
    payload: Result<Json<RouteRequestDto>, JsonRejection>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let Json(dto) = payload?;
    let request = dto.to_request()?;
    Ok(Json(run_comparison(&state, request).await?))
}

async fn run_single(
    state: &AppState,
    strategy: String,
    request: RouteRequest,
) -> Result<RouteSummary, AppError> {
    let service = state.service().clone();
    let route =
        tokio::task::spawn_blocking(move || service.calculate(&strategy, &request)).await??;
    Ok(RouteSummary::from(&route))
}

async fn run_comparison(
    state: &AppState,
    request: RouteRequest,
) -> Result<ComparisonResponse, AppError> {
    let service = state.service().clone();
    let routes = tokio::task::spawn_blocking(move || service.compare_all(&request)).await??;
    Ok(ComparisonResponse {
        routes: routes.iter().map(RouteSummary::from).collect(),
    })
}
