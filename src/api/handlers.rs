//! HTTP request handlers

use crate::api::models::{HealthResponse, PointsRequest};
use crate::error::AppError;
use crate::route::{normalize_route, NormalizedRoute};
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Build a route through the given points and return its normalized view.
///
/// Provider failures are not surfaced: the response is then an empty route.
#[utoipa::path(
    post,
    path = "/points",
    tag = "Routing",
    request_body = PointsRequest,
    responses(
        (
            status = 200,
            description = "Normalized route, empty when no route is available",
            body = NormalizedRoute
        ),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn receive_points(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PointsRequest>,
) -> Json<NormalizedRoute> {
    info!(points = request.points.len(), "Received routing request");

    let document = state.provider.fetch_route(&request.points).await;
    let route = normalize_route(document.as_ref());

    info!(
        segments = route.segments.len(),
        pedestrian_paths = route.pedestrian_paths.len(),
        empty = route.is_empty(),
        "Route normalized"
    );

    Json(route)
}

/// Forward the points and return the provider document unmodified
#[utoipa::path(
    post,
    path = "/points/raw",
    tag = "Routing",
    request_body = PointsRequest,
    responses(
        (status = 200, description = "Provider route document"),
        (status = 502, description = "Routing provider failed"),
        (status = 504, description = "Routing provider timed out")
    )
)]
pub async fn receive_points_raw(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PointsRequest>,
) -> Result<Json<Value>, AppError> {
    info!(points = request.points.len(), "Received raw routing request");

    let document = state.provider.route(&request.points).await?;
    Ok(Json(document))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.provider.name().to_string(),
    })
}
