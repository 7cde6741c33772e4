//! JSON response bodies.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::Route;

/// Options toward one destination.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    /// Where the user leaves from
    pub origin: String,

    /// Destination as requested
    pub destination: String,

    /// Reference instant the options were computed for (RFC 3339)
    pub generated_at: String,

    /// Options, ascending by arrival. Empty means no transit.
    pub options: Vec<RouteResult>,
}

impl OptionsResponse {
    pub fn new(origin: &str, destination: &str, now: DateTime<Local>, routes: &[Route]) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            generated_at: now.to_rfc3339(),
            options: routes.iter().map(RouteResult::from_route).collect(),
        }
    }
}

/// One leave-now option.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// When to leave (RFC 3339)
    pub depart: String,

    /// When you get there (RFC 3339)
    pub arrive: String,

    /// Departure as HH:MM
    pub depart_display: String,

    /// Arrival as HH:MM
    pub arrive_display: String,

    /// Door-to-destination minutes
    pub travel_mins: i64,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            depart: route.depart.to_rfc3339(),
            arrive: route.arrive.to_rfc3339(),
            depart_display: route.depart.format("%H:%M").to_string(),
            arrive_display: route.arrive.format("%H:%M").to_string(),
            travel_mins: route.duration().num_minutes(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
