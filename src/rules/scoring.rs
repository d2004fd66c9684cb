//! Final scores and the winner.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied at the top score.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie(ps) => ps.contains(&player),
        }
    }

    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps,
        }
    }
}

/// One player's line in the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub score: u32,
    pub rank: u8,
    pub dollars: u32,
    pub credits: u32,
    /// Tied for the top score.
    pub winner: bool,
}

/// Every player's score, highest first, ties by player id.
#[must_use]
pub fn standings(players: &PlayerMap<Player>) -> Vec<Standing> {
    let best = players.iter().map(|(_, p)| p.score()).max().unwrap_or(0);
    let mut list: Vec<Standing> = players
        .iter()
        .map(|(id, p)| Standing {
            player: id,
            score: p.score(),
            rank: p.rank,
            dollars: p.dollars,
            credits: p.credits,
            winner: p.score() == best,
        })
        .collect();
    list.sort_by(|a, b| b.score.cmp(&a.score).then(a.player.cmp(&b.player)));
    list
}

/// Everyone tied at the top score.
#[must_use]
pub fn game_result(players: &PlayerMap<Player>) -> GameResult {
    let mut winners: Vec<PlayerId> = standings(players)
        .into_iter()
        .filter(|s| s.winner)
        .map(|s| s.player)
        .collect();
    if winners.len() == 1 {
        GameResult::Winner(winners.remove(0))
    } else {
        GameResult::Tie(winners)
    }
}
