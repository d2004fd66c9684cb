//! Board state: locations, shot counters, and the relations between
//! players, roles and scenes.
//!
//! ## Key Types
//!
//! - `Location`: Fixed roles, takes and the current scene's roles
//! - `Take`: One shot counter
//! - `Locations`: Name-indexed collection of all locations
//! - `Board`: Player→location, player→role, location→scene card
//! - `WrapReport`: Bonus dice and payouts from a wrapped scene

#[allow(clippy::module_inception)]
pub mod board;
pub mod location;

pub use board::{Board, Locations, Payout, WrapReport};
pub use location::{Location, Take};
