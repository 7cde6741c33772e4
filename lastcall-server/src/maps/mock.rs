//! Mock directions client for running without API access.
//!
//! Loads simple timetables from JSON files and answers directions queries
//! from them as if they were live API responses:
//!
//! ```json
//! {
//!   "destination": "Den Haag HS, 2515 Den Haag",
//!   "departures": [["09:17", "09:52"], ["09:47", "10:22"]]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use serde::Deserialize;

use super::api::{DirectionsApi, DirectionsQuery};
use super::error::MapsError;
use super::types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, TimeValue};

/// On-disk timetable format.
#[derive(Debug, Deserialize)]
struct TimetableFile {
    destination: String,
    departures: Vec<(String, String)>,
}

/// One scheduled run: (departure, arrival) as local times of day.
type Run = (NaiveTime, NaiveTime);

/// Mock directions client that serves data from JSON timetables.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    /// Runs per destination, sorted by departure.
    timetables: Arc<HashMap<String, Vec<Run>>>,
}

impl MockDirectionsClient {
    /// Create a new mock client by loading every `*.json` file in a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, MapsError> {
        let data_dir = data_dir.as_ref();
        let mut timetables = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| MapsError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| MapsError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| MapsError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let file: TimetableFile =
                serde_json::from_str(&json).map_err(|e| MapsError::ApiError {
                    status: 0,
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            let runs = parse_runs(&file.departures).map_err(|bad| MapsError::ApiError {
                status: 0,
                message: format!("Invalid time {:?} in {:?}", bad, path),
            })?;

            timetables.insert(file.destination, runs);
        }

        if timetables.is_empty() {
            return Err(MapsError::ApiError {
                status: 0,
                message: format!("No mock timetable files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            timetables: Arc::new(timetables),
        })
    }

    /// Build a mock client from in-memory timetables.
    pub fn from_timetables<'a>(
        timetables: impl IntoIterator<Item = (&'a str, &'a [(&'a str, &'a str)])>,
    ) -> Result<Self, MapsError> {
        let mut parsed = HashMap::new();
        for (destination, runs) in timetables {
            let owned: Vec<(String, String)> = runs
                .iter()
                .map(|(d, a)| (d.to_string(), a.to_string()))
                .collect();
            let runs = parse_runs(&owned).map_err(|bad| MapsError::ApiError {
                status: 0,
                message: format!("Invalid time {:?} for {}", bad, destination),
            })?;
            parsed.insert(destination.to_string(), runs);
        }
        Ok(Self {
            timetables: Arc::new(parsed),
        })
    }

    /// List destinations available in the mock data.
    pub fn available_destinations(&self) -> Vec<String> {
        let mut names: Vec<String> = self.timetables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Answer a query from the timetable.
    ///
    /// Picks the first run departing at or after the requested instant on
    /// the requested local date. When none remains, answers with a walking
    /// leg that carries no times, the way the live API does.
    pub fn answer(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, MapsError> {
        let runs = self
            .timetables
            .get(&query.destination)
            .ok_or_else(|| MapsError::ApiError {
                status: 404,
                message: format!(
                    "No mock data for destination {}. Available: {:?}",
                    query.destination,
                    self.available_destinations()
                ),
            })?;

        let date = query.departure_time.date_naive();
        let earliest = query.departure_time.time();

        let leg = match runs.iter().find(|(depart, _)| *depart >= earliest) {
            Some(&(depart, arrive)) => {
                let depart_at = local_instant(date, depart)?;
                let mut arrive_at = local_instant(date, arrive)?;
                if arrive_at < depart_at {
                    arrive_at += Duration::days(1);
                }
                DirectionsLeg {
                    departure_time: Some(TimeValue::from_epoch(depart_at.timestamp())),
                    arrival_time: Some(TimeValue::from_epoch(arrive_at.timestamp())),
                    start_address: Some(query.origin.clone()),
                    end_address: Some(query.destination.clone()),
                }
            }
            None => DirectionsLeg {
                start_address: Some(query.origin.clone()),
                end_address: Some(query.destination.clone()),
                ..DirectionsLeg::default()
            },
        };

        Ok(DirectionsResponse {
            status: Some("OK".to_string()),
            error_message: None,
            routes: vec![DirectionsRoute {
                legs: vec![leg],
            }],
        })
    }
}

impl DirectionsApi for MockDirectionsClient {
    async fn directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, MapsError> {
        self.answer(query)
    }
}

/// Parse and sort "HH:MM" pairs. On failure returns the offending text.
fn parse_runs(pairs: &[(String, String)]) -> Result<Vec<Run>, String> {
    let parse = |s: &str| NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| s.to_string());

    let mut runs = pairs
        .iter()
        .map(|(depart, arrive)| Ok((parse(depart)?, parse(arrive)?)))
        .collect::<Result<Vec<Run>, String>>()?;
    runs.sort();
    Ok(runs)
}

fn local_instant(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Local>, MapsError> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| MapsError::ApiError {
            status: 500,
            message: format!("{date} {time} does not exist in the local time zone"),
        })
}
