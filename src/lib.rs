//! # deadwood
//!
//! Rules engine for a multi-day board game about bit-part actors: players
//! walk between film sets, take roles, rehearse and act, and collect money,
//! credits and rank until the last day's shooting is done.
//!
//! ## Design Principles
//!
//! 1. **No Global State**: A game is a [`GameState`] value built by
//!    [`GameBuilder`]. A new game is a new value.
//!
//! 2. **Relations, Not Pointers**: Who stands where and who works which role
//!    is kept by [`Board`] as maps keyed by player id and location name.
//!    Locations, roles and scene cards stay plain data.
//!
//! 3. **Validate, Then Execute**: Every command is checked without side
//!    effects first. Execution needs the proof that check produced.
//!
//! 4. **Events Out, Commands In**: The engine never renders anything. It
//!    emits [`GameEvent`]s to an [`EventSink`] and reads text from an
//!    [`InputSource`].
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `cards`: scene cards, roles and the deck
//! - `board`: locations, takes and the board relations; scene wrapping
//! - `definitions`: static board data and the standard board
//! - `rules`: commands, validation, execution and scoring
//! - `game`: session state, day/turn cycle, persistence, controller

pub mod board;
pub mod cards;
pub mod core;
pub mod definitions;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DeckError, GameConfig, GameError, GameRng, GameRngState, PersistError, Player, PlayerId,
    PlayerMap, SetupError,
};

pub use crate::cards::{Area, CardId, Deck, Role, SceneCard};

pub use crate::board::{Board, Location, Locations, Payout, Take, WrapReport};

pub use crate::definitions::{standard_board, BoardDefinition, Currency, UpgradeTable};

pub use crate::rules::{
    ActionOutcome, Command, GameResult, PlayerAction, Rejection, Standing, Verb,
};

pub use crate::game::{
    EventSink, FileStore, GameBuilder, GameController, GameEvent, GameState, InputSource,
    MemoryStore, NullSink, Phase, Prompt, ScriptedInput, Snapshot, SnapshotStore, Step,
};
