//! Planner configuration.

use chrono::{DateTime, Duration, Local};

use crate::maps::{Locale, TravelMode};

/// Parameters for probing and selecting leave-now options.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Time needed to get out of the building and to the stop (minutes).
    /// Added before querying and subtracted from the reported departure.
    pub walk_out_mins: i64,

    /// Spacing between candidate departure instants (minutes).
    pub ladder_step_mins: i64,

    /// Number of candidate departure instants, starting at offset zero.
    pub ladder_len: usize,

    /// Travel mode sent with every query.
    pub mode: TravelMode,

    /// Language, region and units sent with every query.
    pub locale: Locale,
}

impl PlannerConfig {
    /// Set the query locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the walk-out padding as a Duration.
    pub fn walk_out(&self) -> Duration {
        Duration::minutes(self.walk_out_mins)
    }

    /// Offsets of the candidate ladder, ascending from zero.
    pub fn candidate_offsets(&self) -> Vec<Duration> {
        (0..self.ladder_len as i64)
            .map(|k| Duration::minutes(k * self.ladder_step_mins))
            .collect()
    }

    /// Candidate departure instants for a reference `now`, in ladder order.
    pub fn candidate_times(&self, now: DateTime<Local>) -> Vec<DateTime<Local>> {
        self.candidate_offsets()
            .into_iter()
            .map(|offset| now + offset)
            .collect()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walk_out_mins: 10,
            ladder_step_mins: 10,
            ladder_len: 6, // 0..=50 minutes
            mode: TravelMode::Transit,
            locale: Locale::default(),
        }
    }
}
