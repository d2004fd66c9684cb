//! Player commands and the rules behind them.
//!
//! A text line becomes a [`Command`], a command becomes a
//! [`PlayerAction`], and the action is validated and then executed against
//! a [`GameState`](crate::game::GameState):
//!
//! - [`movement`]: move
//! - [`work`]: work
//! - [`upgrade`]: upgrade
//! - [`performance`]: rehearse, act
//! - [`info`]: who, where, board, help
//! - [`control`]: end, quit, save, load
//!
//! [`scoring`] computes the final standings.

pub mod action;
pub mod command;
pub mod control;
pub mod info;
pub mod movement;
pub mod performance;
pub mod rejection;
pub mod scoring;
pub mod upgrade;
pub mod work;

pub use action::{
    action_for, available_verbs, validate, ActionContext, ActionOutcome, PlayerAction, Proof,
    Validated,
};
pub use command::{ActionRecord, Argument, Command, ParseError, Verb};
pub use rejection::Rejection;
pub use scoring::{game_result, standings, GameResult, Standing};
