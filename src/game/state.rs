//! The game session: every piece of mutable state for one game.
//!
//! There is no global game model. A `GameState` is built once by
//! [`GameBuilder`](super::GameBuilder) and handed to the controller; a new
//! game is simply a new `GameState`.

use im::Vector;
use tracing::{debug, info};

use super::events::{EventSink, GameEvent};
use super::turn::Phase;
use crate::board::{Board, Location, Locations};
use crate::cards::{Deck, Role};
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap};
use crate::definitions::UpgradeTable;
use crate::rules::{game_result, standings, ActionRecord, Command, GameResult};

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: GameConfig,

    pub players: PlayerMap<Player>,
    pub board: Board,
    pub deck: Deck,
    pub locations: Locations,
    pub upgrades: UpgradeTable,

    /// Dice and shuffling.
    pub rng: GameRng,

    pub(crate) phase: Phase,

    /// Every rules command executed so far, in order.
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn num_days(&self) -> u32 {
        self.config.num_days
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current day; the last day once the game is over.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.phase.day().unwrap_or(self.config.num_days)
    }

    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.phase.active_player()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// The location a player is standing on.
    #[must_use]
    pub fn player_location(&self, player: PlayerId) -> Option<&Location> {
        self.board
            .player_location(player)
            .and_then(|name| self.locations.get(name))
    }

    /// The role a player is working, looked up at their location.
    #[must_use]
    pub fn current_role(&self, player: PlayerId) -> Option<&Role> {
        let name = self.board.player_role(player)?;
        self.player_location(player)?.role(name)
    }

    /// Budget of the scene shooting at `location`.
    #[must_use]
    pub fn scene_budget(&self, location: &str) -> Option<u8> {
        let id = self.board.scene_card(location)?;
        self.deck.drawn_card(id).map(|card| card.budget)
    }

    /// Winner or tied winners by current score.
    #[must_use]
    pub fn result(&self) -> GameResult {
        game_result(&self.players)
    }

    // === Turn cycle ===

    /// Move one step through the day/turn cycle.
    ///
    /// A turn in progress and a finished game are fixed points: advancing
    /// them changes nothing.
    pub fn advance(&mut self, out: &mut dyn EventSink) -> Result<Phase, GameError> {
        let next_phase = match self.phase {
            Phase::DayInProgress { day, next } => {
                if self.board.scenes_remaining() > 1 {
                    self.players[next].begin_turn();
                    debug!(day, player = %next, "turn started");
                    out.emit(GameEvent::TurnStarted { day, player: next });
                    Phase::TurnInProgress { day, player: next }
                } else {
                    Phase::DayComplete { day, next }
                }
            }
            Phase::DayComplete { day, next } => {
                self.board
                    .end_day(&mut self.players, &mut self.deck, &mut self.locations);
                info!(day, "day complete");
                out.emit(GameEvent::DayEnded { day });

                if day >= self.config.num_days {
                    info!("game over");
                    out.emit(GameEvent::ScoresShown(standings(&self.players)));
                    Phase::GameOver
                } else {
                    self.board.deal_scene_cards(&mut self.deck, &mut self.locations)?;
                    self.announce_day(day + 1, out);
                    Phase::DayInProgress { day: day + 1, next }
                }
            }
            phase @ (Phase::TurnInProgress { .. } | Phase::GameOver) => phase,
        };
        self.phase = next_phase;
        Ok(next_phase)
    }

    /// Finish the active player's turn. Does nothing between turns.
    pub fn end_turn(&mut self) {
        if let Phase::TurnInProgress { day, player } = self.phase {
            self.players[player].end_turn();
            self.phase = Phase::DayInProgress {
                day,
                next: player.next(self.player_count()),
            };
        }
    }

    /// Emit the start-of-day events for `day`: the day itself and the
    /// scene dealt to every set.
    pub fn announce_day(&self, day: u32, out: &mut dyn EventSink) {
        info!(day, scenes = self.board.scenes_remaining(), "day started");
        out.emit(GameEvent::DayStarted {
            day,
            num_days: self.config.num_days,
        });
        for location in self.locations.iter() {
            if let Some(card) = self.board.scene_card(&location.name) {
                out.emit(GameEvent::CardDealt {
                    location: location.name.clone(),
                    card: card.clone(),
                });
            }
        }
    }

    /// Append an executed command to the history.
    pub(crate) fn record(&mut self, player: PlayerId, command: Command) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, command, self.day(), sequence));
    }
}
