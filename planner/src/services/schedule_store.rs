//! In-memory schedule store

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{NotFoundError, PlannerResult};
use crate::traits::ScheduleStore;
use crate::types::Schedule;

/// Single-slot store guarded by an async read/write lock
///
/// Schedules are shared as `Arc`s, so the lock is only held long enough to
/// clone or swap the pointer.
#[derive(Debug, Default)]
pub struct RealScheduleStore {
    current: RwLock<Option<Arc<Schedule>>>,
}

impl RealScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleStore for RealScheduleStore {
    async fn current(&self) -> PlannerResult<Arc<Schedule>> {
        self.current
            .read()
            .await
            .clone()
            .ok_or_else(|| NotFoundError::NoScheduleYet.into())
    }

    async fn replace(&self, schedule: Schedule) -> PlannerResult<()> {
        let schedule = Arc::new(schedule);
        let previous = self.current.write().await.replace(Arc::clone(&schedule));

        debug!(
            id = %schedule.id,
            previous = ?previous.map(|s| s.id),
            "Replaced live schedule"
        );
        Ok(())
    }

    async fn clear(&self) -> PlannerResult<()> {
        *self.current.write().await = None;
        debug!("Cleared live schedule");
        Ok(())
    }
}
