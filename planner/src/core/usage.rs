//! Per-player usage derived from a schedule

use shared::{PlayerUsage, PlayerUsageReport};

use crate::types::Schedule;

/// Appearances and byes per player, in roster order
///
/// Players that never appear still get an entry, so every roster member
/// satisfies `appearances + byes == rounds`.
pub fn usage(schedule: &Schedule) -> PlayerUsageReport {
    let mut report: PlayerUsageReport = schedule
        .players
        .iter()
        .map(|player| (player.name().to_string(), PlayerUsage::default()))
        .collect();

    for round in &schedule.rounds {
        for pairing in &round.pairings {
            for player in [&pairing.player_a, &pairing.player_b] {
                report.entry(player.name().to_string()).or_default().appearances += 1;
            }
        }
        if let Some(bye) = &round.bye {
            report.entry(bye.name().to_string()).or_default().byes += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::PairingGenerator;
    use crate::core::roster::Roster;
    use chrono::NaiveDate;

    fn schedule(names: &[&str], rounds: i64) -> Schedule {
        let roster = Roster::build(names).unwrap();
        PairingGenerator::new()
            .generate(&roster, rounds, NaiveDate::from_ymd_opt(2024, 5, 6).unwrap())
            .unwrap()
    }

    #[test]
    fn test_usage_follows_roster_order() {
        let report = usage(&schedule(&["Zed", "Amy", "Kai"], 3));
        let keys: Vec<&str> = report.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zed", "Amy", "Kai"]);
    }

    #[test]
    fn test_odd_roster_one_bye_each_per_cycle() {
        let report = usage(&schedule(&["A", "B", "C"], 3));
        for record in report.values() {
            assert_eq!(*record, PlayerUsage { appearances: 2, byes: 1 });
        }
    }

    #[test]
    fn test_totals_match_round_count() {
        for rounds in [1, 4, 9, 17] {
            let report = usage(&schedule(&["A", "B", "C", "D", "E", "F", "G"], rounds));
            for record in report.values() {
                assert_eq!(i64::from(record.total_rounds()), rounds);
            }
        }
    }
}
