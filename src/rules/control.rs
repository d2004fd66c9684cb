//! Turn and session control: end, quit, save, load.

use tracing::{info, warn};

use super::action::{ActionContext, ActionOutcome, PlayerAction, Proof};
use super::command::Verb;
use super::rejection::Rejection;
use crate::core::{GameError, PlayerId};
use crate::game::{is_valid_save_name, GameEvent, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndTurn;

impl PlayerAction for EndTurn {
    fn verb(&self) -> Verb {
        Verb::End
    }

    fn validate(&self, _game: &GameState, _player: PlayerId) -> Result<(), Rejection> {
        Ok(())
    }

    fn execute(
        &self,
        _game: &mut GameState,
        _player: PlayerId,
        _ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        Ok(ActionOutcome::EndTurn)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quit;

impl PlayerAction for Quit {
    fn verb(&self) -> Verb {
        Verb::Quit
    }

    fn validate(&self, _game: &GameState, _player: PlayerId) -> Result<(), Rejection> {
        Ok(())
    }

    fn execute(
        &self,
        _game: &mut GameState,
        player: PlayerId,
        _ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        info!(player = %player, "quit");
        Ok(ActionOutcome::Quit)
    }
}

fn check_name(name: &str) -> Result<(), Rejection> {
    if is_valid_save_name(name) {
        Ok(())
    } else {
        Err(Rejection::InvalidSaveName(name.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveGame {
    pub name: String,
}

impl PlayerAction for SaveGame {
    fn verb(&self) -> Verb {
        Verb::Save
    }

    fn validate(&self, _game: &GameState, _player: PlayerId) -> Result<(), Rejection> {
        check_name(&self.name)
    }

    fn execute(
        &self,
        game: &mut GameState,
        _player: PlayerId,
        ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        match ctx.store.save(&self.name, &game.snapshot()) {
            Ok(()) => {
                info!(name = %self.name, "game saved");
                ctx.out.emit(GameEvent::GameSaved {
                    name: self.name.clone(),
                });
            }
            Err(e) => {
                warn!(name = %self.name, error = %e, "save failed");
                ctx.out.message(format!("failed to save {}: {}", self.name, e));
            }
        }
        Ok(ActionOutcome::Continue)
    }
}

/// Replace the running game with a saved one.
///
/// The snapshot is decoded and checked in full first; on any failure the
/// running game is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadGame {
    pub name: String,
}

impl PlayerAction for LoadGame {
    fn verb(&self) -> Verb {
        Verb::Load
    }

    fn validate(&self, _game: &GameState, _player: PlayerId) -> Result<(), Rejection> {
        check_name(&self.name)
    }

    fn execute(
        &self,
        game: &mut GameState,
        _player: PlayerId,
        ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        match ctx.store.load(&self.name).and_then(GameState::from_snapshot) {
            Ok(restored) => {
                *game = restored;
                info!(name = %self.name, day = game.day(), "game loaded");
                ctx.out.emit(GameEvent::GameLoaded {
                    name: self.name.clone(),
                });
                Ok(ActionOutcome::Restored)
            }
            Err(e) => {
                warn!(name = %self.name, error = %e, "load failed");
                ctx.out.message(format!("failed to load {}: {}", self.name, e));
                Ok(ActionOutcome::Continue)
            }
        }
    }
}
