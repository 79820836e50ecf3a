//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::route::Point;

/// Routing request: the ordered waypoints of the route
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PointsRequest {
    /// Waypoints in travel order; the provider expects at least two
    pub points: Vec<Point>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
}
