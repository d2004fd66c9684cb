//! Reasons a command is refused.
//!
//! A rejection leaves the game untouched. Its `Display` text is shown to
//! the player, who may then try another command.

use thiserror::Error;

use crate::definitions::Currency;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no turn is in progress")]
    NoTurnInProgress,

    #[error("there is no location called {0:?}")]
    UnknownLocation(String),

    #[error("{to} is not next to {from}")]
    NotAdjacent { from: String, to: String },

    #[error("you have already moved this turn")]
    AlreadyMoved,

    #[error("you are already working as {0}")]
    HasRole(String),

    #[error("you are not working a role")]
    NoRole,

    #[error("nobody is shooting at the {0}")]
    ReservedLocation(String),

    #[error("the scene at {0} has wrapped for the day")]
    SceneWrapped(String),

    #[error("there is no role called {0:?} here")]
    UnknownRole(String),

    #[error("{0} is already taken")]
    RoleOccupied(String),

    #[error("{role} needs rank {needed}, you are rank {rank}")]
    RankTooLow { role: String, needed: u8, rank: u8 },

    #[error("upgrades are only sold at the Casting Office")]
    NotAtCastingOffice,

    #[error("you are already at the highest rank")]
    MaxRank,

    #[error("you have already upgraded this turn")]
    AlreadyUpgraded,

    #[error("cannot upgrade from rank {rank} to rank {target}")]
    InvalidTargetRank { target: u8, rank: u8 },

    #[error("rank {rank} costs {cost} {currency}, you have {available}")]
    CannotAfford {
        rank: u8,
        currency: Currency,
        cost: u32,
        available: u32,
    },

    #[error("invalid save name {0:?}")]
    InvalidSaveName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let rejection = Rejection::CannotAfford {
            rank: 2,
            currency: Currency::Credits,
            cost: 5,
            available: 4,
        };
        assert_eq!(rejection.to_string(), "rank 2 costs 5 credits, you have 4");

        let rejection = Rejection::NotAdjacent {
            from: "Trailer".to_string(),
            to: "Bank".to_string(),
        };
        assert_eq!(rejection.to_string(), "Bank is not next to Trailer");
    }
}
