//! Domain types for the leave-now planner.

mod route;

pub use route::{OptionSet, Route};
