//! Configuration loading

pub mod settings;

pub use settings::{LoggingConfig, RoutingConfig, ServerConfig, Settings};
