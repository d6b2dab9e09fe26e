//! Test helpers for planner tests

use std::collections::{HashMap, HashSet};

use planner::{PairingGenerator, Roster, Schedule};

use super::fixtures::TestFixtures;

pub struct TestHelpers;

impl TestHelpers {
    /// Generate a schedule directly through the generator
    pub fn schedule<S: AsRef<str>>(names: &[S], rounds: i64) -> Schedule {
        let roster = Roster::build(names).unwrap();
        PairingGenerator::new()
            .generate(&roster, rounds, TestFixtures::start_date())
            .unwrap()
    }

    pub fn numbered_schedule(players: usize, rounds: i64) -> Schedule {
        Self::schedule(&TestFixtures::numbered_players(players), rounds)
    }

    /// Natural cycle length for a roster of `m` players
    pub fn cycle_length(m: usize) -> usize {
        if m % 2 == 0 { m - 1 } else { m }
    }

    /// Occurrences per unordered pair, keyed by names in sorted order
    pub fn pair_counts(schedule: &Schedule) -> HashMap<(String, String), u32> {
        let mut counts = HashMap::new();
        for pairing in schedule.pairings() {
            let (a, b) = pairing.key();
            *counts
                .entry((a.name().to_string(), b.name().to_string()))
                .or_insert(0) += 1;
        }
        counts
    }

    /// Assert that every round seats each roster player exactly once
    pub fn assert_round_structure(schedule: &Schedule) {
        let m = schedule.players.len();
        for round in &schedule.rounds {
            assert_eq!(round.pairings.len(), m / 2, "round {}", round.round);
            assert_eq!(round.bye.is_some(), m % 2 == 1, "round {}", round.round);

            let mut seen = HashSet::new();
            for player in round.participants() {
                assert!(seen.insert(player), "{player} twice in round {}", round.round);
            }
            assert_eq!(seen.len(), m, "round {}", round.round);
        }
    }
}
