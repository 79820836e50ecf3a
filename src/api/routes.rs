//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use crate::route::{
    NormalizedRoute, PedestrianPath, PedestrianPathKind, Point, RouteSegment, TotalInfo,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Route View Gateway API",
        description = "Forwards waypoints to the routing provider and returns a map-ready route.",
        license(name = "MIT"),
    ),
    paths(
        handlers::receive_points,
        handlers::receive_points_raw,
        handlers::health_check,
    ),
    components(schemas(
        PointsRequest,
        Point,
        NormalizedRoute,
        TotalInfo,
        RouteSegment,
        PedestrianPath,
        PedestrianPathKind,
        HealthResponse,
    )),
    tags(
        (name = "Routing", description = "Route building endpoints"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let (cors_enabled, request_timeout) = (
        state.settings.server.cors_enabled,
        Duration::from_secs(state.settings.server.request_timeout_secs),
    );

    let router = Router::new()
        .route("/points", post(handlers::receive_points))
        .route("/points/raw", post(handlers::receive_points_raw))
        .route("/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout));

    // The map client is served from another origin
    let router = if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
