//! Reshaping of the provider's route document into a [`NormalizedRoute`]
//!
//! The document is not owned by this service, so every read goes through
//! `Value::get` and an `as_*` conversion. Missing or mistyped keys drop the
//! affected output and never fail the whole route.

use serde_json::{Number, Value};

use super::geometry::parse_linestring;
use super::models::{
    speed_mps, Coordinate, NormalizedRoute, PedestrianPath, PedestrianPathKind, RouteSegment,
    TotalInfo,
};

const DEFAULT_MANEUVER_TYPE: &str = "unknown";

/// Build the client view of a provider response.
///
/// `None` (provider unavailable) and documents without a non-empty `result`
/// array both produce the empty route. Only the first route alternative is
/// used.
pub fn normalize_route(document: Option<&Value>) -> NormalizedRoute {
    let Some(route) = document.and_then(first_route) else {
        return NormalizedRoute::default();
    };

    NormalizedRoute {
        total_info: total_info(route),
        segments: segments(route),
        pedestrian_paths: pedestrian_paths(route),
    }
}

fn first_route(document: &Value) -> Option<&Value> {
    document.get("result")?.as_array()?.first()
}

/// A numeric field, kept as the provider wrote it together with its `f64` value
fn quantity(value: &Value, key: &str) -> Option<(Number, f64)> {
    match value.get(key)? {
        Value::Number(number) => Some((number.clone(), number.as_f64()?)),
        _ => None,
    }
}

/// Any non-null field, passed through unchanged
fn verbatim(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|field| !field.is_null()).cloned()
}

fn text<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

fn total_info(route: &Value) -> TotalInfo {
    let duration = quantity(route, "total_duration");
    let distance = quantity(route, "total_distance");

    TotalInfo {
        total_duration_minutes: duration.as_ref().map(|(_, seconds)| seconds / 60.0),
        total_duration_seconds: duration.map(|(raw, _)| raw),
        total_distance_km: distance.as_ref().map(|(_, meters)| meters / 1000.0),
        total_distance_meters: distance.map(|(raw, _)| raw),
    }
}

fn segments(route: &Value) -> Vec<RouteSegment> {
    let Some(maneuvers) = route.get("maneuvers").and_then(Value::as_array) else {
        return Vec::new();
    };

    // Numbering follows the maneuver index, so skipped maneuvers leave gaps
    maneuvers
        .iter()
        .enumerate()
        .filter_map(|(index, maneuver)| segment(index + 1, maneuver))
        .collect()
}

fn segment(segment_number: usize, maneuver: &Value) -> Option<RouteSegment> {
    let path = maneuver.get("outcoming_path")?;
    let (duration, duration_secs) = quantity(path, "duration")?;
    let (distance, distance_m) = quantity(path, "distance")?;

    let geometry_coords: Vec<Coordinate> = path
        .get("geometry")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| text(item, "selection"))
                .flat_map(parse_linestring)
                .collect()
        })
        .unwrap_or_default();

    Some(RouteSegment {
        segment_number,
        kind: text(maneuver, "type")
            .unwrap_or(DEFAULT_MANEUVER_TYPE)
            .to_string(),
        comment: text(maneuver, "comment").unwrap_or_default().to_string(),
        distance_meters: distance,
        duration_seconds: duration,
        speed_mps: speed_mps(distance_m, duration_secs),
        geometry_coords,
        turn_angle: verbatim(maneuver, "turn_angle"),
        turn_direction: verbatim(maneuver, "turn_direction"),
    })
}

fn pedestrian_paths(route: &Value) -> Vec<PedestrianPath> {
    [
        ("begin_pedestrian_path", PedestrianPathKind::Start),
        ("end_pedestrian_path", PedestrianPathKind::End),
    ]
    .into_iter()
    .filter_map(|(key, kind)| pedestrian_path(route.get(key)?, kind))
    .collect()
}

fn pedestrian_path(path: &Value, kind: PedestrianPathKind) -> Option<PedestrianPath> {
    let (distance, distance_m) = quantity(path, "distance")?;
    let (duration, duration_secs) = quantity(path, "duration")?;

    // A single geometry object here, unlike the list on maneuver paths
    let geometry_coords: Vec<Coordinate> = path
        .get("geometry")
        .and_then(|geometry| text(geometry, "selection"))
        .map(parse_linestring)
        .unwrap_or_default();

    Some(PedestrianPath {
        kind,
        distance_meters: distance,
        duration_seconds: duration,
        speed_mps: speed_mps(distance_m, duration_secs),
        geometry_coords,
    })
}
