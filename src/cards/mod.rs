//! Scene cards, roles and the deck.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier derived from the card's image filename
//! - `Role`: An acting part, on a card or fixed to a location
//! - `SceneCard`: Budget, title and on-card roles
//! - `Area`: Layout rectangle for renderers
//! - `Deck`: Undrawn / drawn / discarded piles

pub mod deck;
pub mod definition;

pub use deck::Deck;
pub use definition::{Area, CardId, Role, SceneCard};
