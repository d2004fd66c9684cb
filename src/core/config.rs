//! Game configuration.
//!
//! Everything that depends on the number of players is derived once, at
//! setup, by [`GameConfig::for_players`]:
//!
//! | Players | Days | Starting rank | Starting credits |
//! |---------|------|---------------|------------------|
//! | 2–3     | 3    | 1             | 0                |
//! | 4       | 4    | 1             | 0                |
//! | 5       | 4    | 1             | 2                |
//! | 6       | 4    | 1             | 4                |
//! | 7–8     | 4    | 2             | 0                |

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Lowest acting rank.
pub const MIN_RANK: u8 = 1;

/// Highest acting rank a player can upgrade to.
pub const MAX_RANK: u8 = 6;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 8;

/// Where every player starts each day. Never holds a scene.
pub const TRAILER: &str = "Trailer";

/// Where players buy rank upgrades. Never holds a scene.
pub const CASTING_OFFICE: &str = "Casting Office";

/// True for the two locations that never receive scene cards.
#[must_use]
pub fn is_reserved_location(name: &str) -> bool {
    name == TRAILER || name == CASTING_OFFICE
}

/// Per-game configuration derived from the player count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,

    /// Rank every player starts with.
    pub starting_rank: u8,

    /// Credits every player starts with.
    pub starting_credits: u32,

    /// Number of days the game lasts. Fixed at setup.
    pub num_days: u32,

    /// Seed for dice and deck shuffling.
    pub seed: u64,
}

impl GameConfig {
    /// Derive the configuration for `player_count` players.
    ///
    /// ```
    /// use deadwood::core::GameConfig;
    ///
    /// let config = GameConfig::for_players(7, 1).unwrap();
    /// assert_eq!(config.starting_rank, 2);
    /// assert_eq!(config.starting_credits, 0);
    /// assert_eq!(config.num_days, 4);
    ///
    /// assert!(GameConfig::for_players(9, 1).is_err());
    /// ```
    pub fn for_players(player_count: usize, seed: u64) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SetupError::InvalidPlayerCount(player_count));
        }

        let num_days = if player_count < 4 { 3 } else { 4 };
        let starting_credits = match player_count {
            5 => 2,
            6 => 4,
            _ => 0,
        };
        let starting_rank = if player_count >= 7 { 2 } else { MIN_RANK };

        Ok(Self {
            player_count,
            starting_rank,
            starting_credits,
            num_days,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_table() {
        let expected = [
            (2, 3, 1, 0),
            (3, 3, 1, 0),
            (4, 4, 1, 0),
            (5, 4, 1, 2),
            (6, 4, 1, 4),
            (7, 4, 2, 0),
            (8, 4, 2, 0),
        ];

        for (players, days, rank, credits) in expected {
            let config = GameConfig::for_players(players, 0).unwrap();
            assert_eq!(config.num_days, days, "days for {} players", players);
            assert_eq!(config.starting_rank, rank, "rank for {} players", players);
            assert_eq!(config.starting_credits, credits, "credits for {} players", players);
        }
    }

    #[test]
    fn test_invalid_player_counts() {
        for count in [0, 1, 9, 100] {
            assert_eq!(
                GameConfig::for_players(count, 0),
                Err(SetupError::InvalidPlayerCount(count))
            );
        }
    }

    #[test]
    fn test_reserved_locations() {
        assert!(is_reserved_location("Trailer"));
        assert!(is_reserved_location("Casting Office"));
        assert!(!is_reserved_location("Saloon"));
    }
}
