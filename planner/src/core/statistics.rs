//! Aggregate fairness metrics derived from a schedule

use std::collections::HashMap;

use shared::ScheduleStatistics;

use crate::core::usage::usage;
use crate::types::{Player, Schedule};

/// Occurrences of every distinct unordered pair
pub(crate) fn pair_counts(schedule: &Schedule) -> HashMap<(&Player, &Player), u32> {
    let mut counts = HashMap::new();
    for pairing in schedule.pairings() {
        *counts.entry(pairing.key()).or_insert(0) += 1;
    }
    counts
}

/// Summary metrics for the whole schedule
pub fn statistics(schedule: &Schedule) -> ScheduleStatistics {
    let counts = pair_counts(schedule);
    let report = usage(schedule);

    let total_pairings: u32 = counts.values().sum();
    let total_byes = schedule.rounds.iter().filter(|r| r.bye.is_some()).count() as u32;
    let repeated_pairs = counts.values().filter(|&&c| c >= 2).count() as u32;

    let max_appearances = report.values().map(|u| u.appearances).max().unwrap_or(0);
    let min_appearances = report.values().map(|u| u.appearances).min().unwrap_or(0);

    let unique_pairs = counts.len() as u32;
    let avg_pair_frequency = if unique_pairs == 0 {
        0.0
    } else {
        f64::from(total_pairings) / f64::from(unique_pairs)
    };

    ScheduleStatistics {
        total_pairings,
        total_byes,
        repeated_pairs,
        balance_spread: max_appearances - min_appearances,
        total_rounds: schedule.total_rounds(),
        cycle_length: schedule.cycle_length,
        unique_pairs,
        max_pair_frequency: counts.values().copied().max().unwrap_or(0),
        min_pair_frequency: counts.values().copied().min().unwrap_or(0),
        avg_pair_frequency,
        min_appearances,
        max_appearances,
    }
}
