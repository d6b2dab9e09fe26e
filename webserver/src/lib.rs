//! Webserver library for the tournament planner
//!
//! Serves the planner's JSON and CSV endpoints under `/planer` together with
//! the static browser UI.

pub mod config;
pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::ServerArgs;
pub use error::{ApiError, WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
