//! Core types exchanged between the planner and the HTTP layer
//!
//! All wire types serialize with camelCase field names, matching what the
//! browser UI sends and expects.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Input for a schedule generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub player_names: Vec<String>,
    /// Signed so that negative requests reach validation instead of failing to parse
    pub number_of_rounds: i64,
    /// First round date; today when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl ScheduleConfig {
    pub fn new<I, S>(player_names: I, number_of_rounds: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            number_of_rounds,
            start_date: None,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

/// How often a single player was scheduled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUsage {
    pub appearances: u32,
    pub byes: u32,
}

impl PlayerUsage {
    pub fn total_rounds(&self) -> u32 {
        self.appearances + self.byes
    }
}

/// Usage per player name, in roster order
pub type PlayerUsageReport = IndexMap<String, PlayerUsage>;

/// Aggregate fairness metrics for a schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStatistics {
    pub total_pairings: u32,
    pub total_byes: u32,
    pub repeated_pairs: u32,
    pub balance_spread: u32,
    pub total_rounds: u32,
    pub cycle_length: u32,
    pub unique_pairs: u32,
    pub max_pair_frequency: u32,
    pub min_pair_frequency: u32,
    pub avg_pair_frequency: f64,
    pub min_appearances: u32,
    pub max_appearances: u32,
}

/// A distinct opponent pair and how many rounds it occurs in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingFrequency {
    pub players: [String; 2],
    pub frequency: u32,
}

/// Health check response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

impl HealthStatus {
    pub fn ok(uptime_seconds: u64, version: impl Into<String>) -> Self {
        Self {
            status: "OK".to_string(),
            uptime_seconds,
            version: version.into(),
        }
    }
}
