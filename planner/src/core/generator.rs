//! Round-robin pairing generator
//!
//! Uses the circle method: players sit around a circle, seat 0 stays put and
//! the remaining seats rotate by one position per round. Each seat faces its
//! mirror across the circle. Odd rosters get an extra empty seat that rotates
//! with the others; whoever faces it has the bye.
//!
//! One full rotation (the natural cycle) pairs every two players exactly once.
//! Longer schedules replay the whole cycle from the start, so repeats are
//! spread evenly over all pairs.

use std::collections::HashSet;

use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::roster::Roster;
use crate::error::{PlannerError, PlannerResult, ValidationError};
use crate::types::{Pairing, Player, Round, Schedule};

/// Days between two consecutive rounds unless configured otherwise
pub const DEFAULT_ROUND_INTERVAL_DAYS: u32 = 7;

/// Longest schedule accepted unless configured otherwise
pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

/// Pairings and bye of one round of the natural cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRound {
    pub pairings: Vec<Pairing>,
    pub bye: Option<Player>,
}

/// Deterministic circle-method schedule generator
#[derive(Debug, Clone)]
pub struct PairingGenerator {
    round_interval_days: u32,
    max_rounds: u32,
}

impl PairingGenerator {
    pub fn new() -> Self {
        Self {
            round_interval_days: DEFAULT_ROUND_INTERVAL_DAYS,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_config(round_interval_days: u32, max_rounds: u32) -> Self {
        Self {
            round_interval_days,
            max_rounds,
        }
    }

    /// Generate `rounds` rounds for `roster`, the first one dated `start_date`
    pub fn generate(
        &self,
        roster: &Roster,
        rounds: i64,
        start_date: NaiveDate,
    ) -> PlannerResult<Schedule> {
        let number_of_rounds = self.validate_round_count(rounds)?;
        self.validate_date_range(start_date, number_of_rounds)?;
        let cycle = self.natural_cycle(roster);
        let cycle_length = cycle.len() as u32;

        info!(
            players = roster.len(),
            rounds = number_of_rounds,
            cycle_length,
            "Generating round-robin schedule"
        );

        let mut schedule_rounds = Vec::with_capacity(number_of_rounds as usize);
        for round_no in 1..=number_of_rounds {
            let slot = &cycle[((round_no - 1) % cycle_length) as usize];
            let round = Round {
                round: round_no,
                date: self.round_date(start_date, round_no).ok_or_else(|| {
                    PlannerError::invariant(round_no, "round date out of calendar range")
                })?,
                pairings: slot.pairings.clone(),
                bye: slot.bye.clone(),
            };
            verify_round(&round, roster)?;

            debug!(
                round = round_no,
                pairings = round.pairings.len(),
                bye = ?round.bye.as_ref().map(Player::name),
                "Generated round"
            );
            schedule_rounds.push(round);
        }

        Ok(Schedule {
            id: Uuid::new_v4(),
            players: roster.players().to_vec(),
            number_of_rounds,
            cycle_length,
            created_at: Utc::now(),
            rounds: schedule_rounds,
        })
    }

    /// All rounds of one full rotation, in emission order
    pub fn natural_cycle(&self, roster: &Roster) -> Vec<CycleRound> {
        let mut seats: Vec<Option<&Player>> = roster.players().iter().map(Some).collect();
        if roster.has_bye() {
            seats.push(None);
        }

        let seat_count = seats.len();
        let rotating = seat_count - 1;
        let cycle_length = roster.cycle_length() as usize;

        (0..cycle_length)
            .map(|shift| {
                let arrangement: Vec<Option<&Player>> = std::iter::once(seats[0])
                    .chain((0..rotating).map(|j| seats[1 + (j + shift) % rotating]))
                    .collect();

                let mut pairings = Vec::with_capacity(seat_count / 2);
                let mut bye = None;
                for i in 0..seat_count / 2 {
                    match (arrangement[i], arrangement[seat_count - 1 - i]) {
                        (Some(a), Some(b)) => pairings.push(Pairing::new(a.clone(), b.clone())),
                        (Some(p), None) | (None, Some(p)) => bye = Some(p.clone()),
                        (None, None) => {}
                    }
                }
                CycleRound { pairings, bye }
            })
            .collect()
    }

    fn validate_round_count(&self, rounds: i64) -> Result<u32, ValidationError> {
        if rounds < 1 || rounds > i64::from(self.max_rounds) {
            return Err(ValidationError::InvalidRoundCount {
                requested: rounds,
                max: self.max_rounds,
            });
        }
        Ok(rounds as u32)
    }

    /// The last round must still have a calendar date
    fn validate_date_range(
        &self,
        start_date: NaiveDate,
        number_of_rounds: u32,
    ) -> Result<(), ValidationError> {
        match self.round_date(start_date, number_of_rounds) {
            Some(_) => Ok(()),
            None => Err(ValidationError::StartDateOutOfRange { start_date }),
        }
    }

    fn round_date(&self, start_date: NaiveDate, round_no: u32) -> Option<NaiveDate> {
        let offset = u64::from(round_no - 1) * u64::from(self.round_interval_days);
        start_date.checked_add_days(Days::new(offset))
    }
}

impl Default for PairingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Every roster player appears exactly once per round, the bye only on odd rosters
pub fn verify_round(round: &Round, roster: &Roster) -> PlannerResult<()> {
    let mut seen: HashSet<&Player> = HashSet::with_capacity(roster.len());

    for player in round.participants() {
        if !seen.insert(player) {
            return Err(PlannerError::invariant(
                round.round,
                format!("{player} scheduled more than once"),
            ));
        }
    }

    if let Some(missing) = roster.players().iter().find(|p| !seen.contains(p)) {
        return Err(PlannerError::invariant(
            round.round,
            format!("{missing} not scheduled"),
        ));
    }
    if seen.len() != roster.len() {
        return Err(PlannerError::invariant(
            round.round,
            format!("{} players scheduled, roster has {}", seen.len(), roster.len()),
        ));
    }
    if round.bye.is_some() != roster.has_bye() {
        return Err(PlannerError::invariant(
            round.round,
            "bye does not match roster parity",
        ));
    }

    Ok(())
}
