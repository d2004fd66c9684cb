//! The scene deck.
//!
//! Every scene card is in exactly one pile at a time:
//!
//! ```text
//! undrawn --draw()--> drawn --discard()--> discarded
//! ```
//!
//! `undrawn` is shuffled once when the deck is built and then dealt from
//! the front. `drawn` holds the cards currently in play, in the order they
//! were dealt. Discarded cards never come back.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::definition::{CardId, SceneCard};
use crate::core::{DeckError, GameRng};

/// Scene card piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    undrawn: VecDeque<SceneCard>,
    drawn: Vec<SceneCard>,
    discarded: Vec<SceneCard>,
}

impl Deck {
    /// Create a deck that deals `cards` in the given order.
    #[must_use]
    pub fn new(cards: Vec<SceneCard>) -> Self {
        Self {
            undrawn: cards.into(),
            drawn: Vec::new(),
            discarded: Vec::new(),
        }
    }

    /// Create a deck and shuffle it.
    #[must_use]
    pub fn shuffled(cards: Vec<SceneCard>, rng: &mut GameRng) -> Self {
        let mut deck = Self::new(cards);
        deck.shuffle(rng);
        deck
    }

    /// Randomize the order of the undrawn cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.undrawn.make_contiguous());
    }

    /// Deal the next undrawn card into play.
    pub fn draw(&mut self) -> Result<&SceneCard, DeckError> {
        let card = self.undrawn.pop_front().ok_or(DeckError::Empty)?;
        self.drawn.push(card);
        Ok(&self.drawn[self.drawn.len() - 1])
    }

    /// Take a card out of play.
    ///
    /// Returns `None` if the card is not currently drawn; that is a caller
    /// error and the deck is left unchanged.
    pub fn discard(&mut self, id: &CardId) -> Option<&SceneCard> {
        let pos = self.drawn.iter().position(|c| &c.id == id)?;
        let card = self.drawn.remove(pos);
        self.discarded.push(card);
        self.discarded.last()
    }

    /// Discard the most recently dealt card still in play.
    ///
    /// Used at the end of a day, when exactly one scene is left standing.
    pub fn discard_last_drawn_card(&mut self) -> Option<CardId> {
        let card = self.drawn.pop()?;
        let id = card.id.clone();
        self.discarded.push(card);
        Some(id)
    }

    /// Look up a card that is currently in play.
    #[must_use]
    pub fn drawn_card(&self, id: &CardId) -> Option<&SceneCard> {
        self.drawn.iter().find(|c| &c.id == id)
    }

    /// Cards currently in play, in dealing order.
    #[must_use]
    pub fn drawn(&self) -> &[SceneCard] {
        &self.drawn
    }

    #[must_use]
    pub fn undrawn_count(&self) -> usize {
        self.undrawn.len()
    }

    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    #[must_use]
    pub fn discarded_count(&self) -> usize {
        self.discarded.len()
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.undrawn.len() + self.drawn.len() + self.discarded.len()
    }

    #[must_use]
    pub fn is_drawn(&self, id: &CardId) -> bool {
        self.drawn.iter().any(|c| &c.id == id)
    }

    #[must_use]
    pub fn is_undrawn(&self, id: &CardId) -> bool {
        self.undrawn.iter().any(|c| &c.id == id)
    }

    /// Check that no card id appears twice across the piles.
    ///
    /// Returns the first duplicated id.
    pub fn check_partition(&self) -> Result<(), CardId> {
        let mut seen = FxHashSet::default();
        let all = self
            .undrawn
            .iter()
            .chain(self.drawn.iter())
            .chain(self.discarded.iter());
        for card in all {
            if !seen.insert(&card.id) {
                return Err(card.id.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<SceneCard> {
        (1..=n)
            .map(|i| SceneCard::new(format!("{:02}.png", i), format!("Scene {}", i), 3))
            .collect()
    }

    #[test]
    fn test_draw_is_fifo() {
        let mut deck = Deck::new(cards(3));

        assert_eq!(deck.draw().unwrap().id.as_str(), "01");
        assert_eq!(deck.draw().unwrap().id.as_str(), "02");
        assert_eq!(deck.undrawn_count(), 1);
        assert_eq!(deck.drawn_count(), 2);
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = Deck::new(cards(1));

        assert!(deck.draw().is_ok());
        assert_eq!(deck.draw().unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn test_discard_moves_to_discard_pile() {
        let mut deck = Deck::new(cards(3));
        let id = deck.draw().unwrap().id.clone();

        assert!(deck.is_drawn(&id));
        assert!(deck.discard(&id).is_some());
        assert!(!deck.is_drawn(&id));
        assert!(deck.drawn_card(&id).is_none());
        assert_eq!(deck.discarded_count(), 1);
        assert_eq!(deck.total(), 3);
    }

    #[test]
    fn test_discard_unknown_is_noop() {
        let mut deck = Deck::new(cards(2));
        deck.draw().unwrap();

        assert!(deck.discard(&CardId::new("99")).is_none());
        // Undrawn card cannot be discarded either
        assert!(deck.discard(&CardId::new("02")).is_none());
        assert_eq!(deck.drawn_count(), 1);
        assert_eq!(deck.discarded_count(), 0);
    }

    #[test]
    fn test_discard_last_drawn_card() {
        let mut deck = Deck::new(cards(3));
        deck.draw().unwrap();
        deck.draw().unwrap();

        assert_eq!(deck.discard_last_drawn_card(), Some(CardId::new("02")));
        assert_eq!(deck.discard_last_drawn_card(), Some(CardId::new("01")));
        assert_eq!(deck.discard_last_drawn_card(), None);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(cards(10), &mut rng);

        let mut ids = Vec::new();
        while let Ok(card) = deck.draw() {
            ids.push(card.id.as_str().to_string());
        }

        let mut sorted = ids.clone();
        sorted.sort();
        assert_ne!(ids, sorted);
        assert_eq!(sorted.len(), 10);
        assert!(deck.check_partition().is_ok());
    }

    #[test]
    fn test_check_partition_detects_duplicates() {
        let mut all = cards(2);
        all.push(all[0].clone());
        let deck = Deck::new(all);

        assert_eq!(deck.check_partition(), Err(CardId::new("01")));
    }
}
