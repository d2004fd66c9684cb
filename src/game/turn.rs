//! Day and turn phases.
//!
//! ```text
//! DayInProgress ──scenes > 1──▶ TurnInProgress ──turn ends──▶ DayInProgress
//!       │
//!       └──scenes <= 1──▶ DayComplete ──more days──▶ DayInProgress (day + 1)
//!                               └──last day──▶ GameOver
//! ```
//!
//! `GameState::advance` moves one step along this graph; only
//! `TurnInProgress` waits for input.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where the game is in its day/turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Between turns. `next` is the player whose turn comes next.
    DayInProgress { day: u32, next: PlayerId },

    /// Waiting for `player` to issue commands.
    TurnInProgress { day: u32, player: PlayerId },

    /// The day's scenes are used up; the board must be reset.
    DayComplete { day: u32, next: PlayerId },

    GameOver,
}

impl Phase {
    /// Current day, or `None` once the game is over.
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        match *self {
            Phase::DayInProgress { day, .. }
            | Phase::TurnInProgress { day, .. }
            | Phase::DayComplete { day, .. } => Some(day),
            Phase::GameOver => None,
        }
    }

    /// The player whose turn it is, if a turn is in progress.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        match *self {
            Phase::TurnInProgress { player, .. } => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }
}
