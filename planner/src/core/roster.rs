//! Roster validation
//!
//! Turns raw player names into an ordered set of distinct players. Input order
//! is preserved because it seeds the seat layout of the generator.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Player;

/// Largest roster accepted unless configured otherwise
pub const DEFAULT_MAX_PLAYERS: usize = 512;

/// Validated, ordered set of distinct players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster with the default size ceiling
    pub fn build<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_limit(names, DEFAULT_MAX_PLAYERS)
    }

    /// Build a roster, rejecting blank names, duplicates and oversized input
    pub fn build_with_limit<I, S>(names: I, max_players: usize) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut players = Vec::new();
        let mut seen = HashSet::new();

        for (index, raw) in names.into_iter().enumerate() {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                return Err(ValidationError::BlankPlayerName { position: index + 1 });
            }
            if !seen.insert(name.to_string()) {
                return Err(ValidationError::DuplicatePlayer {
                    name: name.to_string(),
                });
            }
            players.push(Player::new(name));
        }

        if players.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        if players.len() > max_players {
            return Err(ValidationError::RosterTooLarge {
                size: players.len(),
                max: max_players,
            });
        }

        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false for a built roster; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Odd rosters need a bye every round
    pub fn has_bye(&self) -> bool {
        self.players.len() % 2 == 1
    }

    /// Rounds before a pairing must repeat: M-1 for even M, M for odd M
    pub fn cycle_length(&self) -> u32 {
        let m = self.players.len() as u32;
        if m % 2 == 0 { m - 1 } else { m }
    }
}
