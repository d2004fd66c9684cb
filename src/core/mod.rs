//! Core engine types: players, RNG, configuration and errors.
//!
//! These are the building blocks every other module depends on. Nothing in
//! here knows about locations, scenes or actions.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    is_reserved_location, GameConfig, CASTING_OFFICE, MAX_PLAYERS, MAX_RANK, MIN_PLAYERS,
    MIN_RANK, TRAILER,
};
pub use error::{DeckError, GameError, PersistError, SetupError};
pub use player::{Player, PlayerId, PlayerMap, TurnFlags};
pub use rng::{GameRng, GameRngState, DIE_FACES};
