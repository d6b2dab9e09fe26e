//! Planner facade
//!
//! Wires validation, generation, the schedule store and the read-side views
//! together. The HTTP layer talks to nothing else.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use shared::{PairingFrequency, PlayerUsageReport, ScheduleConfig, ScheduleStatistics};
use tracing::{info, warn};

use crate::core::{
    export, history, statistics, usage, PairingGenerator, Roster, DEFAULT_MAX_PLAYERS,
    DEFAULT_MAX_ROUNDS, DEFAULT_ROUND_INTERVAL_DAYS,
};
use crate::error::PlannerResult;
use crate::traits::{ExportArchive, ScheduleStore};
use crate::types::{Round, Schedule};

/// Tunables of the planner core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub round_interval_days: u32,
    pub max_players: usize,
    pub max_rounds: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            round_interval_days: DEFAULT_ROUND_INTERVAL_DAYS,
            max_players: DEFAULT_MAX_PLAYERS,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// A rendered export ready to hand to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub content: Vec<u8>,
    /// Server-side copy, when archiving is enabled
    pub archived_path: Option<PathBuf>,
}

/// Tournament planner with injected storage and archive
pub struct Planner<S, A>
where
    S: ScheduleStore,
    A: ExportArchive,
{
    config: PlannerConfig,
    generator: PairingGenerator,
    store: Arc<S>,
    archive: Arc<A>,
}

impl<S, A> Clone for Planner<S, A>
where
    S: ScheduleStore,
    A: ExportArchive,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            generator: self.generator.clone(),
            store: Arc::clone(&self.store),
            archive: Arc::clone(&self.archive),
        }
    }
}

impl<S, A> Planner<S, A>
where
    S: ScheduleStore,
    A: ExportArchive,
{
    pub fn new(config: PlannerConfig, store: S, archive: A) -> Self {
        Self {
            config,
            generator: PairingGenerator::with_config(config.round_interval_days, config.max_rounds),
            store: Arc::new(store),
            archive: Arc::new(archive),
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Validate `request`, generate its schedule and make it the live one
    ///
    /// The store is only touched once the whole schedule has been generated
    /// and verified; any failure leaves the previous schedule in place.
    pub async fn generate(&self, request: ScheduleConfig) -> PlannerResult<Schedule> {
        let roster = Roster::build_with_limit(&request.player_names, self.config.max_players)
            .inspect_err(|e| warn!(error = %e, "Rejected roster"))?;
        let start_date = request
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let schedule = self
            .generator
            .generate(&roster, request.number_of_rounds, start_date)
            .inspect_err(|e| warn!(error = %e, "Schedule generation failed"))?;

        self.store.replace(schedule.clone()).await?;

        info!(
            id = %schedule.id,
            players = schedule.players.len(),
            rounds = schedule.number_of_rounds,
            "✅ Schedule generated"
        );
        Ok(schedule)
    }

    pub async fn current_schedule(&self) -> PlannerResult<Arc<Schedule>> {
        self.store.current().await
    }

    /// Rounds of the live schedule
    pub async fn pairings(&self) -> PlannerResult<Vec<Round>> {
        Ok(self.store.current().await?.rounds.clone())
    }

    pub async fn player_usage(&self) -> PlannerResult<PlayerUsageReport> {
        Ok(usage::usage(&*self.store.current().await?))
    }

    pub async fn statistics(&self) -> PlannerResult<ScheduleStatistics> {
        Ok(statistics::statistics(&*self.store.current().await?))
    }

    pub async fn pairing_history(&self) -> PlannerResult<Vec<PairingFrequency>> {
        Ok(history::pairing_history(&*self.store.current().await?))
    }

    /// Render the live schedule as CSV and archive a copy
    pub async fn export(&self) -> PlannerResult<ExportFile> {
        let schedule = self.store.current().await?;
        let filename = export::suggested_filename(&schedule);
        let content = export::render_csv(&schedule);
        let archived_path = self.archive.archive(&filename, &content).await?;

        info!(
            filename = %filename,
            bytes = content.len(),
            archived = archived_path.is_some(),
            "📄 Exported schedule"
        );
        Ok(ExportFile {
            filename,
            content_type: export::CSV_CONTENT_TYPE,
            content,
            archived_path,
        })
    }

    /// Drop the live schedule
    pub async fn reset(&self) -> PlannerResult<()> {
        self.store.clear().await
    }
}
