//! Service implementations
//!
//! Production implementations of the planner's service traits.

pub mod export_archive;
pub mod schedule_store;

pub use export_archive::{DisabledExportArchive, RealExportArchive};
pub use schedule_store::RealScheduleStore;

#[cfg(test)]
mod tests;
