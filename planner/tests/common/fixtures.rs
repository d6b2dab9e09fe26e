//! Test fixtures and data for planner tests

use chrono::NaiveDate;
use shared::ScheduleConfig;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const FOUR_PLAYERS: [&'static str; 4] = ["A", "B", "C", "D"];
    pub const THREE_PLAYERS: [&'static str; 3] = ["A", "B", "C"];
    pub const TWO_PLAYERS: [&'static str; 2] = ["A", "B"];

    /// Largest roster exercised by the exhaustive property sweeps
    pub const MAX_SWEEP_PLAYERS: usize = 11;

    pub fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// `P1..=Pcount`
    pub fn numbered_players(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("P{i}")).collect()
    }

    /// Club-style names including ones that need CSV quoting
    pub fn awkward_players() -> Vec<String> {
        vec![
            "O'Brien".to_string(),
            "Müller, Jan".to_string(),
            "\"The Rook\"".to_string(),
            "Ana María".to_string(),
            "BYE".to_string(),
        ]
    }

    pub fn request<S: AsRef<str>>(names: &[S], rounds: i64) -> ScheduleConfig {
        ScheduleConfig::new(names.iter().map(|n| n.as_ref().to_string()), rounds)
            .with_start_date(Self::start_date())
    }
}
