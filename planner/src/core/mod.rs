//! Core scheduling logic
//!
//! Pure functions and types with no I/O. The generator is deterministic for a
//! given roster and round count; every view is derived from a `Schedule`.

pub mod export;
pub mod generator;
pub mod history;
pub mod roster;
pub mod statistics;
pub mod usage;

pub use export::{parse_csv, render_csv, suggested_filename, ExportRow, CSV_CONTENT_TYPE};
pub use generator::{PairingGenerator, DEFAULT_MAX_ROUNDS, DEFAULT_ROUND_INTERVAL_DAYS};
pub use history::pairing_history;
pub use roster::{Roster, DEFAULT_MAX_PLAYERS};
pub use statistics::statistics;
pub use usage::usage;
