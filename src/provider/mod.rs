//! Routing provider module - the trait seam and the 2GIS HTTP client

pub mod dgis;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::route::Point;

pub use dgis::{DgisRoutingClient, RoutingRequest};

/// Trait for third-party routing services
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Provider name used in logs and health output
    fn name(&self) -> &str;

    /// Request a route through `points`, returning the provider document unmodified
    async fn route(&self, points: &[Point]) -> Result<Value>;

    /// Request a route, reporting any failure as `None` instead of an error.
    ///
    /// Callers treat `None` as "no route data available".
    async fn fetch_route(&self, points: &[Point]) -> Option<Value> {
        match self.route(points).await {
            Ok(document) => Some(document),
            Err(e) => {
                warn!(provider = %self.name(), error = %e, "Routing request failed");
                None
            }
        }
    }
}
