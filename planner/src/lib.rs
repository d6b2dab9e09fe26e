//! Round-robin tournament planner
//!
//! Builds deterministic round-robin schedules with the circle method, keeps
//! the most recent one in an injected store and derives usage, statistics,
//! pairing history and CSV exports from it.

pub mod core;
pub mod error;
pub mod planner_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use crate::core::{ExportRow, PairingGenerator, Roster};
pub use error::{NotFoundError, PlannerError, PlannerResult, ValidationError};
pub use planner_impl::{ExportFile, Planner, PlannerConfig};
pub use types::{Pairing, Player, Round, Schedule};

// Re-export trait definitions and service implementations
pub use services::{DisabledExportArchive, RealExportArchive, RealScheduleStore};
pub use traits::{ExportArchive, ScheduleStore};
