//! Google Maps Directions HTTP client.
//!
//! Issues one `GET /maps/api/directions/json` per query and classifies the
//! failure modes: transport errors, timeouts, HTTP status codes and the
//! `status` field Google embeds in an HTTP 200 body.

use std::time::Duration;

use tracing::debug;

use super::api::{DirectionsApi, DirectionsQuery};
use super::error::MapsError;
use super::types::DirectionsResponse;

/// Default base URL for the Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Path of the directions endpoint (JSON output).
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Google Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Maps Directions API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        if config.api_key.trim().is_empty() {
            return Err(MapsError::NotConfigured("empty Google Maps API key".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Look up transit directions.
    pub async fn get_directions(
        &self,
        query: &DirectionsQuery,
    ) -> Result<DirectionsResponse, MapsError> {
        let url = format!("{}{}", self.base_url, DIRECTIONS_PATH);

        debug!(
            destination = %query.destination,
            departure_time = %query.departure_time,
            "requesting directions"
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", query.origin.as_str()),
                ("destination", query.destination.as_str()),
                ("mode", query.mode.as_str()),
                ("language", query.language.as_str()),
                ("units", query.units.as_str()),
                ("region", query.region.as_str()),
            ])
            .query(&[("departure_time", query.departure_time.timestamp())])
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(MapsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| MapsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        check_status(directions)
    }
}

impl DirectionsApi for GoogleMapsClient {
    async fn directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, MapsError> {
        self.get_directions(query).await
    }
}

/// Turn the body-level `status` into an error where Google reports one.
///
/// `ZERO_RESULTS` is passed through; the caller decides what an empty
/// route list means.
fn check_status(response: DirectionsResponse) -> Result<DirectionsResponse, MapsError> {
    match response.status.as_deref() {
        None | Some("OK") | Some("ZERO_RESULTS") => Ok(response),
        Some("OVER_QUERY_LIMIT") | Some("OVER_DAILY_LIMIT") => Err(MapsError::RateLimited),
        Some("REQUEST_DENIED") => Err(MapsError::Unauthorized),
        Some(other) => Err(MapsError::Rejected {
            status: other.to_string(),
            message: response.error_message,
        }),
    }
}
