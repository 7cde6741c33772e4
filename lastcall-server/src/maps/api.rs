//! The directions lookup capability.
//!
//! The planner only ever talks to [`DirectionsApi`], so it can be driven by
//! the live Google client, the file-backed mock, or a scripted fake in tests.

use std::future::Future;

use chrono::{DateTime, Local};

use super::error::MapsError;
use super::types::DirectionsResponse;

/// Travel mode for a directions query.
///
/// Only transit is planned; the leg times the planner reads exist for
/// transit routes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Transit,
}

impl TravelMode {
    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Transit => "transit",
        }
    }
}

/// Unit system for distances in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Wire name of the unit system.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

/// Language, region bias and units sent with every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub region: String,
    pub units: Units,
}

impl Locale {
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: region.into(),
            units: Units::Metric,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("nl", "nl")
    }
}

/// A single directions query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub language: String,
    pub units: Units,
    pub region: String,
    /// Earliest instant the traveller can board.
    pub departure_time: DateTime<Local>,
}

/// Something that can answer directions queries.
///
/// Implementations perform exactly one lookup per call and never retry.
pub trait DirectionsApi: Send + Sync {
    fn directions(
        &self,
        query: &DirectionsQuery,
    ) -> impl Future<Output = Result<DirectionsResponse, MapsError>> + Send;
}
