//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default location of the gateway configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Prefix for structured environment overrides, e.g. `ROUTE_GATEWAY__SERVER__PORT`
pub const ENV_PREFIX: &str = "ROUTE_GATEWAY";

/// Plain environment variable holding the routing API key
pub const API_KEY_VAR: &str = "API_KEY";

/// Plain environment variable holding the routing application id
pub const APP_ID_VAR: &str = "APP_ID";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub routing: RoutingConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// Routing provider configuration.
///
/// `api_key` and `app_id` are secrets; they are usually supplied through the
/// `API_KEY` and `APP_ID` environment variables rather than the config file.
#[derive(Clone, Deserialize, Serialize)]
pub struct RoutingConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub app_id: String,
    /// Outbound request timeout. The provider call is otherwise unbounded.
    #[serde(default = "default_routing_timeout")]
    pub timeout_ms: u64,
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_traffic_mode")]
    pub traffic_mode: String,
    #[serde(default)]
    pub filters: Vec<String>,
}

fn default_base_url() -> String {
    "http://routing.api.2gis.com".to_string()
}

fn default_endpoint() -> String {
    "/routing/7.0.0/global".to_string()
}

fn default_routing_timeout() -> u64 {
    10000
}

fn default_transport() -> String {
    "driving".to_string()
}

fn default_output() -> String {
    "detailed".to_string()
}

fn default_locale() -> String {
    "ru".to_string()
}

fn default_traffic_mode() -> String {
    "jam".to_string()
}

// Secrets are masked so settings can be logged.
impl std::fmt::Debug for RoutingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingConfig")
            .field("base_url", &self.base_url)
            .field("endpoint", &self.endpoint)
            .field("api_key", &mask(&self.api_key))
            .field("app_id", &mask(&self.app_id))
            .field("timeout_ms", &self.timeout_ms)
            .field("transport", &self.transport)
            .field("output", &self.output)
            .field("locale", &self.locale)
            .field("traffic_mode", &self.traffic_mode)
            .field("filters", &self.filters)
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl RoutingConfig {
    /// Full URL of the routing endpoint, without the key query parameter
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Settings {
    /// Load settings from the default configuration file and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from a specific configuration file and the process environment
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, std::env::vars().collect())
    }

    /// Load settings from a configuration file and an explicit environment map.
    ///
    /// Sources are layered as: defaults, the file (if it exists, YAML or TOML by
    /// extension), `ROUTE_GATEWAY__*` variables, then the plain `API_KEY` and
    /// `APP_ID` variables.
    pub fn load_with_env<P: AsRef<Path>>(path: P, env: HashMap<String, String>) -> Result<Self> {
        let path = path.as_ref();

        // Determine file format
        let format = if path.extension().map_or(false, |ext| ext == "toml") {
            FileFormat::Toml
        } else {
            FileFormat::Yaml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("server.request_timeout_secs", default_request_timeout() as i64)?
            .set_default("server.cors_enabled", true)?
            .set_default("routing.base_url", default_base_url())?
            .set_default("routing.endpoint", default_endpoint())?
            .set_default("routing.api_key", "")?
            .set_default("routing.app_id", "")?
            .set_default("routing.timeout_ms", default_routing_timeout() as i64)?
            .set_default("routing.transport", default_transport())?
            .set_default("routing.output", default_output())?
            .set_default("routing.locale", default_locale())?
            .set_default("routing.traffic_mode", default_traffic_mode())?
            .set_default("routing.filters", Vec::<String>::new())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        let api_key = env.get(API_KEY_VAR).cloned();
        let app_id = env.get(APP_ID_VAR).cloned();

        // Plain variables win over the prefixed ones
        config_builder = config_builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .set_override_option("routing.api_key", api_key)?
            .set_override_option("routing.app_id", app_id)?;

        let settings: Settings = config_builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(config_error("Server port cannot be 0"));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(config_error("Server request timeout cannot be 0"));
        }

        if self.routing.api_key.trim().is_empty() {
            return Err(config_error(format!(
                "Routing API key is not set (use the {} environment variable)",
                API_KEY_VAR
            )));
        }

        if self.routing.app_id.trim().is_empty() {
            return Err(config_error(format!(
                "Routing application id is not set (use the {} environment variable)",
                APP_ID_VAR
            )));
        }

        if self.routing.timeout_ms == 0 {
            return Err(config_error("Routing timeout cannot be 0"));
        }

        if reqwest::Url::parse(&self.routing.url()).is_err() {
            return Err(config_error(format!(
                "Routing URL '{}' is not a valid URL",
                self.routing.url()
            )));
        }

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> AppError {
    AppError::Config(config::ConfigError::Message(message.into()))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                request_timeout_secs: default_request_timeout(),
                cors_enabled: true,
            },
            routing: RoutingConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            app_id: String::new(),
            timeout_ms: default_routing_timeout(),
            transport: default_transport(),
            output: default_output(),
            locale: default_locale(),
            traffic_mode: default_traffic_mode(),
            filters: vec![],
        }
    }
}
