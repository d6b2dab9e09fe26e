//! Pairing history: how often each opponent pair meets

use indexmap::IndexMap;
use shared::PairingFrequency;

use crate::types::{Player, Schedule};

/// Every distinct pair with its frequency, most frequent first
///
/// Pairs with equal frequency keep the order in which they first appear in
/// the schedule, named in the orientation of that first appearance.
pub fn pairing_history(schedule: &Schedule) -> Vec<PairingFrequency> {
    let mut counts: IndexMap<(&Player, &Player), ([&Player; 2], u32)> = IndexMap::new();
    for pairing in schedule.pairings() {
        counts
            .entry(pairing.key())
            .or_insert(([&pairing.player_a, &pairing.player_b], 0))
            .1 += 1;
    }

    let mut history: Vec<PairingFrequency> = counts
        .into_values()
        .map(|([a, b], frequency)| PairingFrequency {
            players: [a.name().to_string(), b.name().to_string()],
            frequency,
        })
        .collect();
    // stable, so ties stay in first-seen order
    history.sort_by(|x, y| y.frequency.cmp(&x.frequency));
    history
}
