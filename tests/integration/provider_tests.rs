//! Routing provider tests against a mock 2GIS endpoint

use route_view_gateway::config::RoutingConfig;
use route_view_gateway::provider::{DgisRoutingClient, RoutingProvider};
use route_view_gateway::route::Point;
use route_view_gateway::AppError;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROUTE_PATH: &str = "/routing/7.0.0/global";

fn test_config(server: &MockServer) -> RoutingConfig {
    RoutingConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        app_id: "test-app".to_string(),
        timeout_ms: 2000,
        ..Default::default()
    }
}

fn test_points() -> Vec<Point> {
    vec![
        Point {
            kind: "stop".to_string(),
            lon: 37.582591,
            lat: 55.775887,
        },
        Point {
            kind: "stop".to_string(),
            lon: 37.656625,
            lat: 55.765134,
        },
    ]
}

fn route_document() -> Value {
    serde_json::from_str(include_str!("../fixtures/route_response.json")).unwrap()
}

#[tokio::test]
async fn test_route_sends_expected_request() {
    let server = MockServer::start().await;
    let document = route_document();

    Mock::given(method("POST"))
        .and(path(ROUTE_PATH))
        .and(query_param("key", "test-key"))
        .and(header("x-app-id", "test-app"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "points": [
                { "type": "stop", "lon": 37.582591, "lat": 55.775887 },
                { "type": "stop", "lon": 37.656625, "lat": 55.765134 }
            ],
            "transport": "driving",
            "filters": [],
            "output": "detailed",
            "locale": "ru",
            "traffic_mode": "jam"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(document.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = DgisRoutingClient::new(&test_config(&server)).unwrap();
    let result = client.route(&test_points()).await.unwrap();

    // Returned unmodified
    assert_eq!(result, document);
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = DgisRoutingClient::new(&test_config(&server)).unwrap();
    let err = client.route(&test_points()).await.unwrap_err();

    assert!(matches!(err, AppError::Provider(_)));
    assert!(err.to_string().contains("upstream down"));
    assert!(client.fetch_route(&test_points()).await.is_none());
}

#[tokio::test]
async fn test_non_json_body_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = DgisRoutingClient::new(&test_config(&server)).unwrap();
    assert!(client.fetch_route(&test_points()).await.is_none());
}

#[tokio::test]
async fn test_provider_error_payload_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Invalid key",
            "status": "FAIL",
            "type": "error"
        })))
        .mount(&server)
        .await;

    let client = DgisRoutingClient::new(&test_config(&server)).unwrap();
    let err = client.route(&test_points()).await.unwrap_err();

    assert!(err.to_string().contains("Invalid key"));
    assert!(client.fetch_route(&test_points()).await.is_none());
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(route_document())
                .set_delay(Duration::from_millis(1000)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.timeout_ms = 100;
    let client = DgisRoutingClient::new(&config).unwrap();

    let err = client.route(&test_points()).await.unwrap_err();
    assert!(matches!(err, AppError::HttpClient(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_unreachable_provider_yields_none() {
    let config = RoutingConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        app_id: "test-app".to_string(),
        timeout_ms: 500,
        ..Default::default()
    };

    let client = DgisRoutingClient::new(&config).unwrap();
    assert!(client.fetch_route(&test_points()).await.is_none());
}
