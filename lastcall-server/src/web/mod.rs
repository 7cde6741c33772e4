//! Web front end: a destination index and per-destination option pages.
//!
//! Every handler answers HTML to browsers and JSON to everything else.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
