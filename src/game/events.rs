//! Events emitted by the engine for whatever is presenting the game.
//!
//! The engine never formats a screen. It reports what happened as a
//! closed set of tagged events and hands them to an [`EventSink`]: a
//! `Vec` for tests, an `mpsc::Sender` for a GUI running on another
//! thread, or [`NullSink`] to drop them.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::board::WrapReport;
use crate::cards::CardId;
use crate::core::PlayerId;
use crate::rules::{Standing, Verb};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Plain text for the player.
    Message(String),

    DayStarted { day: u32, num_days: u32 },
    DayEnded { day: u32 },
    TurnStarted { day: u32, player: PlayerId },

    /// Drop every action button currently shown.
    ActionsCleared,

    /// Commands the active player may try right now.
    ActionsAvailable { player: PlayerId, verbs: Vec<Verb> },

    CardDealt { location: String, card: CardId },
    PlayerMoved { player: PlayerId, location: String },
    RoleTaken { player: PlayerId, role: String, location: String },
    Rehearsed { player: PlayerId, tokens: u32 },

    /// An acting roll: `die + tokens` against the scene budget.
    DiceRolled {
        player: PlayerId,
        die: u8,
        tokens: u32,
        budget: u8,
        success: bool,
    },

    ShotRemoved { location: String, take: u8, remaining: usize },
    SceneWrapped(WrapReport),

    /// A player's rank, money or credits changed.
    PlayerUpdated {
        player: PlayerId,
        rank: u8,
        dollars: u32,
        credits: u32,
    },

    GameSaved { name: String },
    GameLoaded { name: String },

    /// Final standings, best first.
    ScoresShown(Vec<Standing>),
}

/// Receives events from the engine.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);

    /// Shorthand for [`GameEvent::Message`].
    fn message(&mut self, text: String) {
        self.emit(GameEvent::Message(text));
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Forwards events over a channel. A closed channel drops them.
impl EventSink for Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        let _ = self.send(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
