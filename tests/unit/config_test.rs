//! Unit tests for configuration module

use route_view_gateway::config::Settings;
use std::collections::HashMap;
use std::io::Write;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_without_file() {
    let settings = Settings::load_with_env("does/not/exist.yaml", HashMap::new()).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.routing.url(), "http://routing.api.2gis.com/routing/7.0.0/global");
    assert_eq!(settings.routing.timeout_ms, 10000);
    assert_eq!(settings.logging.format, "json");
    assert!(settings.routing.api_key.is_empty());

    // Credentials are required
    assert!(settings.validate().is_err());
}

#[test]
fn test_plain_credentials_from_env() {
    let settings = Settings::load_with_env(
        "does/not/exist.yaml",
        env(&[("API_KEY", "secret-key"), ("APP_ID", "my-app")]),
    )
    .unwrap();

    assert_eq!(settings.routing.api_key, "secret-key");
    assert_eq!(settings.routing.app_id, "my-app");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_yaml_file_and_prefixed_env() {
    let file = write_config(
        ".yaml",
        r#"
server:
  port: 9000
routing:
  base_url: "http://localhost:7000"
  api_key: "file-key"
  app_id: "file-app"
  locale: "en"
logging:
  format: "pretty"
"#,
    );

    let settings = Settings::load_with_env(
        file.path(),
        env(&[("ROUTE_GATEWAY__SERVER__PORT", "9100"), ("APP_ID", "env-app")]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 9100);
    assert_eq!(settings.routing.base_url, "http://localhost:7000");
    assert_eq!(settings.routing.api_key, "file-key");
    assert_eq!(settings.routing.app_id, "env-app");
    assert_eq!(settings.routing.locale, "en");
    assert_eq!(settings.routing.transport, "driving");
    assert!(!settings.logging.is_json());
    assert!(settings.validate().is_ok());
}

#[test]
fn test_toml_file() {
    let file = write_config(
        ".toml",
        r#"
[routing]
timeout_ms = 2500
traffic_mode = "statistics"
"#,
    );

    let settings = Settings::load_with_env(file.path(), HashMap::new()).unwrap();
    assert_eq!(settings.routing.timeout_ms, 2500);
    assert_eq!(settings.routing.traffic_mode, "statistics");
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.routing.api_key = "key".to_string();
    settings.routing.app_id = "app".to_string();
    assert!(settings.validate().is_ok());

    settings.server.port = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_bad_url() {
    let mut settings = Settings::default();
    settings.routing.api_key = "key".to_string();
    settings.routing.app_id = "app".to_string();
    settings.routing.base_url = "not a url".to_string();

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_zero_timeout() {
    let mut settings = Settings::default();
    settings.routing.api_key = "key".to_string();
    settings.routing.app_id = "app".to_string();
    settings.routing.timeout_ms = 0;

    assert!(settings.validate().is_err());
}
