//! Directions lookup.
//!
//! This module provides the [`DirectionsApi`] capability the planner
//! queries, an HTTP client for the Google Maps Directions API, and a
//! timetable-backed mock for development without credentials.
//!
//! Key characteristics of the Directions API:
//! - Times are epoch seconds in `departure_time.value` / `arrival_time.value`
//! - Transit legs carry both times; a walking fallback carries neither
//! - Errors are often reported in an HTTP 200 body via the `status` field

mod api;
mod backend;
mod client;
mod error;
mod mock;
mod types;

pub use api::{DirectionsApi, DirectionsQuery, Locale, TravelMode, Units};
pub use backend::DirectionsBackend;
pub use client::{GoogleMapsClient, MapsConfig};
pub use error::MapsError;
pub use mock::MockDirectionsClient;
pub use types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, TimeValue};
