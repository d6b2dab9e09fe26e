//! Schedule data types
//!
//! A `Schedule` is immutable once generated; the store hands it out behind an
//! `Arc` and every view is computed from it on demand.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Case-preserving player identifier, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(String);

impl Player {
    /// Callers must pass an already trimmed, non-empty name; `Roster::build` does the checking
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Player {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Two distinct players facing each other in one round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub player_a: Player,
    pub player_b: Player,
}

impl Pairing {
    pub fn new(player_a: Player, player_b: Player) -> Self {
        Self { player_a, player_b }
    }

    /// Order-independent key, smaller name first
    pub fn key(&self) -> (&Player, &Player) {
        if self.player_a <= self.player_b {
            (&self.player_a, &self.player_b)
        } else {
            (&self.player_b, &self.player_a)
        }
    }
}

/// One time slot of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based ordinal
    pub round: u32,
    pub date: NaiveDate,
    pub pairings: Vec<Pairing>,
    pub bye: Option<Player>,
}

impl Round {
    /// Every player scheduled this round, pairings first, then the bye
    pub fn participants(&self) -> impl Iterator<Item = &Player> {
        self.pairings
            .iter()
            .flat_map(|p| [&p.player_a, &p.player_b])
            .chain(self.bye.iter())
    }
}

/// A generated round-robin schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    /// Roster order
    pub players: Vec<Player>,
    pub number_of_rounds: u32,
    /// Rounds before any pairing has to repeat
    pub cycle_length: u32,
    pub created_at: DateTime<Utc>,
    pub rounds: Vec<Round>,
}

impl Schedule {
    pub fn total_rounds(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.rounds.iter().flat_map(|r| r.pairings.iter())
    }
}
