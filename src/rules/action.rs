//! The validate/execute protocol every player command goes through.
//!
//! Each verb has a [`PlayerAction`]. `validate` only reads the game and
//! either accepts the command or returns a [`Rejection`]; `execute`
//! performs it and reports whether the turn is over.
//!
//! `execute` takes a [`Proof`], which only this module can create, and the
//! only place that creates one is [`Validated::execute`]. The only way to
//! get a [`Validated`] is [`validate`]. So no action runs unvalidated.

use tracing::debug;

use super::command::{Command, Verb};
use super::control::{EndTurn, LoadGame, Quit, SaveGame};
use super::info::{Help, ShowBoard, Where, Who};
use super::movement::{self, MoveAction};
use super::performance::{ActAction, RehearseAction};
use super::rejection::Rejection;
use super::upgrade::{self, UpgradeAction};
use super::work::{self, WorkAction};
use crate::core::{GameError, PlayerId};
use crate::game::{EventSink, GameState, SnapshotStore};

/// What the controller should do after a command ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Same player, next command.
    Continue,
    EndTurn,
    /// The whole game was replaced by a saved one.
    Restored,
    Quit,
}

impl ActionOutcome {
    /// `EndTurn` if `ends` holds, `Continue` otherwise.
    #[must_use]
    pub fn end_turn_if(ends: bool) -> Self {
        if ends {
            ActionOutcome::EndTurn
        } else {
            ActionOutcome::Continue
        }
    }
}

/// Collaborators an action may need while executing.
pub struct ActionContext<'a> {
    pub out: &'a mut dyn EventSink,
    pub store: &'a mut dyn SnapshotStore,
}

/// Permission to execute. Cannot be built outside this module.
#[derive(Debug)]
pub struct Proof(());

/// One player command.
pub trait PlayerAction: std::fmt::Debug {
    fn verb(&self) -> Verb;

    /// Check every precondition without changing anything.
    fn validate(&self, game: &GameState, player: PlayerId) -> Result<(), Rejection>;

    /// Perform the command.
    ///
    /// Errors are reserved for broken engine bookkeeping; anything the
    /// player could get wrong is caught by `validate`.
    fn execute(
        &self,
        game: &mut GameState,
        player: PlayerId,
        ctx: &mut ActionContext<'_>,
        proof: Proof,
    ) -> Result<ActionOutcome, GameError>;
}

/// The action implementing `command`.
#[must_use]
pub fn action_for(command: &Command) -> Box<dyn PlayerAction> {
    match command.clone() {
        Command::Move { destination } => Box::new(MoveAction { destination }),
        Command::Work { role } => Box::new(WorkAction { role }),
        Command::Upgrade { rank, currency } => Box::new(UpgradeAction { rank, currency }),
        Command::Rehearse => Box::new(RehearseAction),
        Command::Act => Box::new(ActAction),
        Command::End => Box::new(EndTurn),
        Command::Who => Box::new(Who),
        Command::Where => Box::new(Where),
        Command::Board => Box::new(ShowBoard),
        Command::Help => Box::new(Help),
        Command::Save { name } => Box::new(SaveGame { name }),
        Command::Load { name } => Box::new(LoadGame { name }),
        Command::Quit => Box::new(Quit),
    }
}

/// A command that passed validation for the active player.
#[derive(Debug)]
pub struct Validated {
    action: Box<dyn PlayerAction>,
    command: Command,
    player: PlayerId,
}

impl Validated {
    #[must_use]
    pub fn command(&self) -> &Command {
        &self.command
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Run the command against the state it was validated on.
    pub fn execute(
        self,
        game: &mut GameState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, GameError> {
        let outcome = self.action.execute(game, self.player, ctx, Proof(()))?;
        debug!(player = %self.player, command = %self.command, ?outcome, "executed");

        if self.command.verb().is_recorded() {
            game.record(self.player, self.command);
        }
        Ok(outcome)
    }
}

/// Validate `command` for the player whose turn it is.
pub fn validate(command: Command, game: &GameState) -> Result<Validated, Rejection> {
    let player = game.active_player().ok_or(Rejection::NoTurnInProgress)?;
    let action = action_for(&command);
    action.validate(game, player)?;
    Ok(Validated {
        action,
        command,
        player,
    })
}

/// Verbs `player` could use right now, judged without their arguments.
#[must_use]
pub fn available_verbs(game: &GameState, player: PlayerId) -> Vec<Verb> {
    Verb::ALL
        .into_iter()
        .filter(|&verb| match verb {
            Verb::Move => movement::check_can_move(game, player).is_ok(),
            Verb::Work => work::check_can_work(game, player).is_ok(),
            Verb::Upgrade => upgrade::check_can_upgrade(game, player).is_ok(),
            Verb::Rehearse | Verb::Act => game.board.player_role(player).is_some(),
            _ => true,
        })
        .collect()
}
