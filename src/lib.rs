//! Route View Gateway
//!
//! Forwards waypoints to a third-party routing service and reshapes the
//! returned route description into a compact structure for map rendering.

pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod route;

pub use error::{AppError, Result};

use std::sync::Arc;

use provider::RoutingProvider;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<crate::config::Settings>,
    pub provider: Arc<dyn RoutingProvider>,
}
