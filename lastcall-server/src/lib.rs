//! Last Call: when do I have to leave?
//!
//! Asks a directions service when transit toward a destination leaves over
//! the next hour, and boils the answers down to a short list of
//! "leave at X, arrive at Y" options. Served as web pages and as a console
//! display.

pub mod config;
pub mod display;
pub mod domain;
pub mod logging;
pub mod maps;
pub mod planner;
pub mod web;
