//! 2GIS Routing API client

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use super::RoutingProvider;
use crate::config::RoutingConfig;
use crate::error::{AppError, Result};
use crate::route::Point;

const APP_ID_HEADER: &str = "x-app-id";

/// Body of a routing request
#[derive(Debug, Clone, Serialize)]
pub struct RoutingRequest<'a> {
    pub points: &'a [Point],
    pub transport: &'a str,
    pub filters: &'a [String],
    pub output: &'a str,
    pub locale: &'a str,
    pub traffic_mode: &'a str,
}

/// Client for the 2GIS routing endpoint.
///
/// The API key travels in the `key` query parameter and the application id
/// in the `X-App-Id` header.
pub struct DgisRoutingClient {
    client: Client,
    url: String,
    api_key: String,
    transport: String,
    filters: Vec<String>,
    output: String,
    locale: String,
    traffic_mode: String,
}

impl DgisRoutingClient {
    /// Create a new client from the routing configuration
    pub fn new(config: &RoutingConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let app_id = HeaderValue::from_str(&config.app_id).map_err(|e| {
            AppError::Config(config::ConfigError::Message(format!(
                "Routing application id is not a valid header value: {}",
                e
            )))
        })?;
        headers.insert(HeaderName::from_static(APP_ID_HEADER), app_id);

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url(),
            api_key: config.api_key.clone(),
            transport: config.transport.clone(),
            filters: config.filters.clone(),
            output: config.output.clone(),
            locale: config.locale.clone(),
            traffic_mode: config.traffic_mode.clone(),
        })
    }

    /// Build the request body for `points`
    pub fn request_body<'a>(&'a self, points: &'a [Point]) -> RoutingRequest<'a> {
        RoutingRequest {
            points,
            transport: &self.transport,
            filters: &self.filters,
            output: &self.output,
            locale: &self.locale,
            traffic_mode: &self.traffic_mode,
        }
    }
}

#[async_trait]
impl RoutingProvider for DgisRoutingClient {
    fn name(&self) -> &str {
        "2gis"
    }

    async fn route(&self, points: &[Point]) -> Result<Value> {
        debug!(url = %self.url, points = points.len(), "Sending routing request");

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.request_body(points))
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Routing provider responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!("Provider returned {}: {}", status, body)));
        }

        let document = response.json::<Value>().await.map_err(|e| {
            error!(error = %e, "Failed to parse routing response");
            AppError::Provider(format!("Failed to parse response: {}", e))
        })?;

        // Errors can also arrive with a 200 and a non-OK status field
        if let Some(provider_status) = document.get("status").and_then(Value::as_str) {
            if provider_status != "OK" {
                let message = document
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                return Err(AppError::Provider(format!(
                    "Provider reported status {}: {}",
                    provider_status, message
                )));
            }
        }

        Ok(document)
    }
}
