//! Route data model and the provider response normalizer

pub mod geometry;
pub mod models;
pub mod normalize;

pub use geometry::parse_linestring;
pub use models::{
    Coordinate, NormalizedRoute, PedestrianPath, PedestrianPathKind, Point, RouteSegment,
    TotalInfo,
};
pub use normalize::normalize_route;
