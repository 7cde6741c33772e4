//! Application state for the web layer.

use std::sync::Arc;

use crate::maps::DirectionsBackend;
use crate::planner::PlannerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Directions client
    pub directions: Arc<DirectionsBackend>,

    /// Planner configuration
    pub planner: Arc<PlannerConfig>,

    /// Where the user leaves from
    pub origin: Arc<str>,

    /// Destinations listed on the index page
    pub destinations: Arc<[String]>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directions: DirectionsBackend,
        planner: PlannerConfig,
        origin: impl Into<Arc<str>>,
        destinations: Vec<String>,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            planner: Arc::new(planner),
            origin: origin.into(),
            destinations: destinations.into(),
        }
    }
}
