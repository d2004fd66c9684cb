//! Player identification, per-player storage and player economy state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based and stable for the
//! whole game: the first player is `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Rank, money, credits, rehearsal tokens and the per-turn flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use deadwood::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }

    /// The player after this one in seating order, wrapping to player 1.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        if self.index() + 1 >= player_count {
            PlayerId(1)
        } else {
            PlayerId(self.0 + 1)
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use deadwood::core::{PlayerId, PlayerMap};
///
/// let mut dollars: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// dollars[PlayerId::new(2)] += 5;
/// assert_eq!(dollars[PlayerId::new(2)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count < 255, "At most 254 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has an entry.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.0 >= 1 && player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seating order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Flags cleared at the start of every turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    /// It is this player's turn.
    pub active: bool,
    pub has_moved: bool,
    /// Took a role this turn. Informational only: no rule reads it, since
    /// holding a role already blocks a second `work`.
    pub has_worked: bool,
    pub has_upgraded: bool,
}

/// Mutable per-player economy and turn state.
///
/// The role a player is working and the location they stand on are
/// relations kept by [`Board`](crate::board::Board), not fields here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Acting rank, 1..=6.
    pub rank: u8,
    pub dollars: u32,
    pub credits: u32,
    pub rehearsal_tokens: u32,
    pub flags: TurnFlags,
}

impl Player {
    /// Create a player with the given starting rank and credits.
    #[must_use]
    pub fn new(id: PlayerId, rank: u8, credits: u32) -> Self {
        Self {
            id,
            rank,
            dollars: 0,
            credits,
            rehearsal_tokens: 0,
            flags: TurnFlags::default(),
        }
    }

    /// Clear the per-turn flags and mark the player active.
    pub fn begin_turn(&mut self) {
        self.flags = TurnFlags {
            active: true,
            ..TurnFlags::default()
        };
    }

    /// Mark the player inactive once their turn is over.
    pub fn end_turn(&mut self) {
        self.flags.active = false;
    }

    /// Final score: five points per rank plus credits and dollars.
    #[must_use]
    pub fn score(&self) -> u32 {
        5 * u32::from(self.rank) + self.credits + self.dollars
    }
}
