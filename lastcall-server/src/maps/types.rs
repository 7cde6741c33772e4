//! Directions API response DTOs.
//!
//! These types map directly to the Google Maps Directions JSON response.
//! Only the fields the planner reads are modelled. Transit legs carry
//! `departure_time`/`arrival_time`; when no transit service runs in the
//! requested window Google falls back to a walking route whose legs omit
//! both fields.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    /// Response status, e.g. "OK", "ZERO_RESULTS", "REQUEST_DENIED".
    pub status: Option<String>,

    /// Human-readable detail accompanying a non-OK status.
    pub error_message: Option<String>,

    /// Suggested routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// The first (preferred) route, if any.
    pub fn first_route(&self) -> Option<&DirectionsRoute> {
        self.routes.first()
    }
}

/// One suggested route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsRoute {
    /// Legs of the route. Without waypoints there is exactly one.
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// A leg between two locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsLeg {
    /// Departure time (transit only).
    pub departure_time: Option<TimeValue>,

    /// Arrival time (transit only).
    pub arrival_time: Option<TimeValue>,

    /// Geocoded start address.
    pub start_address: Option<String>,

    /// Geocoded end address.
    pub end_address: Option<String>,
}

/// A timestamp as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeValue {
    /// Seconds since the Unix epoch.
    pub value: i64,
}

impl TimeValue {
    pub fn from_epoch(value: i64) -> Self {
        Self { value }
    }
}
