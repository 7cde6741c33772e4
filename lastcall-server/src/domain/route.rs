//! Leave-now options.

use std::fmt;

use chrono::{DateTime, Duration, Local};

/// A "leave at X, arrive at Y" option.
///
/// `depart` is when the user must start moving, already including the
/// walk out to the stop. `arrive` is the arrival at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub depart: DateTime<Local>,
    pub arrive: DateTime<Local>,
}

/// Options shown to the user: ascending by arrival, one per arrival instant.
///
/// Empty means no transit was found in the probed window.
pub type OptionSet = Vec<Route>;

impl Route {
    pub fn new(depart: DateTime<Local>, arrive: DateTime<Local>) -> Self {
        Self { depart, arrive }
    }

    /// Door-to-destination time.
    pub fn duration(&self) -> Duration {
        self.arrive.signed_duration_since(self.depart)
    }

    /// Time left before the user has to leave, relative to `now`.
    ///
    /// Negative when the departure is already past.
    pub fn leave_in(&self, now: DateTime<Local>) -> Duration {
        self.depart.signed_duration_since(now)
    }
}

impl From<(DateTime<Local>, DateTime<Local>)> for Route {
    fn from((depart, arrive): (DateTime<Local>, DateTime<Local>)) -> Self {
        Self::new(depart, arrive)
    }
}

impl From<Route> for (DateTime<Local>, DateTime<Local>) {
    fn from(route: Route) -> Self {
        (route.depart, route.arrive)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.depart.format("%H:%M"),
            self.arrive.format("%H:%M")
        )
    }
}
