//! Leave-now option selection.
//!
//! Probes the directions API at each candidate instant, drops the instants
//! with no transit, and collapses probes that found the same run.

use chrono::{DateTime, Local};
use futures::future::try_join_all;
use tracing::info;

use crate::domain::{OptionSet, Route};
use crate::maps::DirectionsApi;

use super::config::PlannerConfig;
use super::dedup::largest_key_each_value;
use super::probe::{ProbeError, RouteProbe};

/// Selects leave-now options toward a destination.
pub struct OptionSelector<'a, A: DirectionsApi> {
    probe: RouteProbe<'a, A>,
    config: &'a PlannerConfig,
}

impl<'a, A: DirectionsApi> OptionSelector<'a, A> {
    /// Create a new selector from a fixed origin.
    pub fn new(api: &'a A, config: &'a PlannerConfig, origin: &'a str) -> Self {
        Self {
            probe: RouteProbe::new(api, config, origin),
            config,
        }
    }

    /// Find the options for leaving between `now` and the end of the ladder.
    ///
    /// All probes run concurrently. The first failing probe fails the whole
    /// selection; there is no partial result. An empty set means no probe
    /// found transit.
    pub async fn select_options(
        &self,
        destination: &str,
        now: DateTime<Local>,
    ) -> Result<OptionSet, ProbeError> {
        let candidates = self.config.candidate_times(now);

        let found = try_join_all(
            candidates
                .iter()
                .map(|&candidate| self.probe.probe(destination, candidate)),
        )
        .await?;

        let pairs: Vec<(DateTime<Local>, DateTime<Local>)> =
            found.into_iter().flatten().map(Into::into).collect();

        if pairs.is_empty() {
            info!(%destination, %now, "no transit in probed window");
            return Ok(Vec::new());
        }

        let found_count = pairs.len();
        let options: OptionSet = largest_key_each_value(pairs)
            .into_iter()
            .map(Route::from)
            .collect();

        info!(
            %destination,
            %now,
            probes = candidates.len(),
            found = found_count,
            options = options.len(),
            "selected leave-now options"
        );

        Ok(options)
    }
}
