//! Waypoints sent to the provider and the normalized route returned to clients

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// A `[lon, lat]` coordinate pair
pub type Coordinate = [f64; 2];

/// Input waypoint, forwarded to the routing provider as-is
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Point {
    /// Waypoint kind understood by the provider (e.g. "stop", "pref", "walking")
    #[serde(rename = "type")]
    pub kind: String,
    pub lon: f64,
    pub lat: f64,
}

/// Route summary; every field is omitted when the provider did not report it.
///
/// Seconds and meters keep the provider's number as-is; minutes and
/// kilometers are derived.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct TotalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub total_duration_seconds: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub total_distance_meters: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance_km: Option<f64>,
}

impl TotalInfo {
    pub fn is_empty(&self) -> bool {
        self.total_duration_seconds.is_none() && self.total_distance_meters.is_none()
    }
}

/// One driving segment, built from a maneuver and its outcoming path
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct RouteSegment {
    /// 1-based index of the maneuver this segment came from
    pub segment_number: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub comment: String,
    #[schema(value_type = f64)]
    pub distance_meters: Number,
    #[schema(value_type = f64)]
    pub duration_seconds: Number,
    pub speed_mps: f64,
    #[schema(value_type = Vec<Vec<f64>>)]
    pub geometry_coords: Vec<Coordinate>,
    /// Provider value, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub turn_angle: Option<Value>,
    /// Provider value, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub turn_direction: Option<Value>,
}

/// Which end of the route a pedestrian path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PedestrianPathKind {
    Start,
    End,
}

/// Walking leg before or after the driving part of the route
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PedestrianPath {
    #[serde(rename = "type")]
    pub kind: PedestrianPathKind,
    #[schema(value_type = f64)]
    pub distance_meters: Number,
    #[schema(value_type = f64)]
    pub duration_seconds: Number,
    pub speed_mps: f64,
    #[schema(value_type = Vec<Vec<f64>>)]
    pub geometry_coords: Vec<Coordinate>,
}

/// Flattened route view returned to the client
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct NormalizedRoute {
    pub total_info: TotalInfo,
    pub segments: Vec<RouteSegment>,
    pub pedestrian_paths: Vec<PedestrianPath>,
}

impl NormalizedRoute {
    /// True when no route data was extracted at all
    pub fn is_empty(&self) -> bool {
        self.total_info.is_empty() && self.segments.is_empty() && self.pedestrian_paths.is_empty()
    }
}

/// Average speed in m/s; zero when the duration is zero
pub fn speed_mps(distance_meters: f64, duration_seconds: f64) -> f64 {
    if duration_seconds == 0.0 {
        0.0
    } else {
        distance_meters / duration_seconds
    }
}
