//! Single-instant route probe.
//!
//! Asks the directions API for the first transit option from the origin
//! when leaving at one candidate instant, padded by the walk-out time.

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use crate::domain::Route;
use crate::maps::{DirectionsApi, DirectionsQuery, DirectionsResponse, MapsError};

use super::config::PlannerConfig;

/// Error from probing or selecting routes.
///
/// "No route" is not an error; it is `Ok(None)` from [`RouteProbe::probe`].
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The directions lookup itself failed
    #[error("directions lookup failed: {0}")]
    Upstream(#[from] MapsError),

    /// The response contained no routes at all
    #[error("directions response contained no routes")]
    NoRoutes,

    /// The first route has no legs
    #[error("first route has no legs")]
    NoLegs,

    /// Exactly one of the two leg times is present
    #[error("last leg is missing its {missing}")]
    PartialTimes { missing: &'static str },

    /// A timestamp outside the representable range
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

/// Probes the directions API for one candidate departure at a time.
pub struct RouteProbe<'a, A: DirectionsApi> {
    api: &'a A,
    config: &'a PlannerConfig,
    origin: &'a str,
}

impl<'a, A: DirectionsApi> RouteProbe<'a, A> {
    /// Create a new probe from a fixed origin.
    pub fn new(api: &'a A, config: &'a PlannerConfig, origin: &'a str) -> Self {
        Self {
            api,
            config,
            origin,
        }
    }

    /// Build the query for boarding at `departure`.
    pub fn query(&self, destination: &str, departure: DateTime<Local>) -> DirectionsQuery {
        DirectionsQuery {
            origin: self.origin.to_string(),
            destination: destination.to_string(),
            mode: self.config.mode,
            language: self.config.locale.language.clone(),
            units: self.config.locale.units,
            region: self.config.locale.region.clone(),
            departure_time: departure,
        }
    }

    /// Find the option for leaving at `requested`.
    ///
    /// The query asks for transit from `requested + walk_out`, and the
    /// returned departure is the API's boarding time minus `walk_out`, i.e.
    /// when the user has to start moving. Returns `Ok(None)` when the API
    /// reports no transit in the window.
    pub async fn probe(
        &self,
        destination: &str,
        requested: DateTime<Local>,
    ) -> Result<Option<Route>, ProbeError> {
        let walk_out = self.config.walk_out();
        let boarding = requested
            .checked_add_signed(walk_out)
            .ok_or(ProbeError::InvalidTimestamp(requested.timestamp()))?;
        let query = self.query(destination, boarding);

        let response = self.api.directions(&query).await?;

        let Some((departure, arrival)) = last_leg_times(&response)? else {
            debug!(%destination, %requested, "no transit from this instant");
            return Ok(None);
        };

        let depart = instant(departure)?
            .checked_sub_signed(walk_out)
            .ok_or(ProbeError::InvalidTimestamp(departure))?;
        let route = Route::new(depart, instant(arrival)?);
        debug!(%destination, %requested, %route, "probe found route");
        Ok(Some(route))
    }
}

/// Epoch-second times of the last leg of the first route.
///
/// `None` when the leg carries neither time, which is how the API says
/// "no transit".
fn last_leg_times(response: &DirectionsResponse) -> Result<Option<(i64, i64)>, ProbeError> {
    let route = response.first_route().ok_or(ProbeError::NoRoutes)?;
    let leg = route.legs.last().ok_or(ProbeError::NoLegs)?;

    match (&leg.departure_time, &leg.arrival_time) {
        (Some(departure), Some(arrival)) => Ok(Some((departure.value, arrival.value))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ProbeError::PartialTimes {
            missing: "arrival time",
        }),
        (None, Some(_)) => Err(ProbeError::PartialTimes {
            missing: "departure time",
        }),
    }
}

fn instant(epoch_secs: i64) -> Result<DateTime<Local>, ProbeError> {
    Local
        .timestamp_opt(epoch_secs, 0)
        .single()
        .ok_or(ProbeError::InvalidTimestamp(epoch_secs))
}
