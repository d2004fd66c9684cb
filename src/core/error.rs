//! Error types for setup, the deck, persistence and the game loop.
//!
//! Command-level failures (wrong location, not enough money, ...) are not
//! errors in this sense; they are [`Rejection`](crate::rules::Rejection)s
//! reported back to the player.

use thiserror::Error;

use super::player::PlayerId;

/// Deck invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("no undrawn scene cards remain")]
    Empty,
}

/// Errors raised while assembling a game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player count must be between 2 and 8, got {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid board definition: {0}")]
    InvalidDefinition(String),

    #[error("deck holds {available} scene cards but {needed} are needed")]
    NotEnoughCards { needed: usize, available: usize },

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors from saving or loading a snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("no saved game named {0:?}")]
    NotFound(String),

    #[error("invalid save name {0:?}")]
    InvalidName(String),

    #[error("saved game is corrupt: {0}")]
    Corrupt(String),

    #[error("save format version {found}, expected {expected}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal errors from the turn loop.
///
/// These mean the engine's own bookkeeping is broken; a well-formed
/// session never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("board refers to unknown location {0:?}")]
    UnknownLocation(String),

    #[error("scene card {0} is not in play")]
    CardNotInPlay(String),

    #[error("{player} works {role:?}, which is not at their location")]
    RoleNotFound { player: PlayerId, role: String },
}
