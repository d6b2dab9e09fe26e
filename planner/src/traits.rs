//! Service trait definitions for dependency injection
//!
//! Storage and filesystem access sit behind these traits so the planner can
//! be exercised with mocks and several planners can coexist in one process.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PlannerResult;
use crate::types::Schedule;

/// Holder of the single live schedule
///
/// Readers either see the whole previous schedule or the whole new one.
#[mockall::automock]
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Most recently generated schedule, `NotFound` before the first generation
    async fn current(&self) -> PlannerResult<Arc<Schedule>>;

    /// Atomically replace the live schedule
    async fn replace(&self, schedule: Schedule) -> PlannerResult<()>;

    /// Forget the live schedule
    async fn clear(&self) -> PlannerResult<()>;
}

/// Server-side copy of exported files
#[mockall::automock]
#[async_trait]
pub trait ExportArchive: Send + Sync {
    /// Store `content` under `filename`, returning where it landed if archiving is enabled
    async fn archive(&self, filename: &str, content: &[u8]) -> PlannerResult<Option<PathBuf>>;
}
