//! Shared types for the tournament planner
//!
//! Contains only the types that cross the boundary between the planner core
//! and the HTTP layer, plus the common error type and tracing setup.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
