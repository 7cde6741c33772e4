//! Runtime choice between the live and mock directions clients.

use std::path::Path;

use super::api::{DirectionsApi, DirectionsQuery};
use super::client::{GoogleMapsClient, MapsConfig};
use super::error::MapsError;
use super::mock::MockDirectionsClient;
use super::types::DirectionsResponse;

/// The directions client the binaries run against.
#[derive(Debug, Clone)]
pub enum DirectionsBackend {
    Google(GoogleMapsClient),
    Mock(MockDirectionsClient),
}

impl DirectionsBackend {
    /// Use the mock client when a mock data directory is given, otherwise
    /// the Google client, which needs an API key.
    pub fn from_settings(
        mock_dir: Option<&Path>,
        api_key: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, MapsError> {
        if let Some(dir) = mock_dir {
            return Ok(DirectionsBackend::Mock(MockDirectionsClient::new(dir)?));
        }

        let api_key = api_key.ok_or_else(|| {
            MapsError::NotConfigured(
                "no Google Maps API key (set GOOGLE_MAPS_API_KEY or write apikey.txt)"
                    .to_string(),
            )
        })?;

        let client = GoogleMapsClient::new(MapsConfig::new(api_key).with_timeout(timeout_secs))?;
        Ok(DirectionsBackend::Google(client))
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DirectionsBackend::Google(_) => "google",
            DirectionsBackend::Mock(_) => "mock",
        }
    }
}

impl DirectionsApi for DirectionsBackend {
    async fn directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, MapsError> {
        match self {
            DirectionsBackend::Google(client) => client.get_directions(query).await,
            DirectionsBackend::Mock(client) => client.answer(query),
        }
    }
}
