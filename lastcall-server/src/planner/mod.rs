//! Leave-now planner.
//!
//! This module implements the core question: "if I start packing up now,
//! which trains can I still catch, and when do I have to walk out?"
//!
//! The selector probes the directions API at a ladder of instants from now
//! on, pads each probe by the walk-out time, and keeps, for every distinct
//! arrival, the latest departure that still makes it.

mod config;
mod dedup;
mod probe;
mod select;


pub use config::PlannerConfig;
pub use dedup::largest_key_each_value;
pub use probe::{ProbeError, RouteProbe};
pub use select::OptionSelector;
