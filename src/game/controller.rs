//! The turn loop.
//!
//! `GameController` owns one game and one snapshot store. It pulls text
//! from an [`InputSource`], turns it into commands (asking for missing
//! arguments), runs them through validate/execute and advances the
//! day/turn cycle. Everything the players should see goes to an
//! [`EventSink`].
//!
//! The loop can also be driven one command at a time with
//! [`GameController::submit`], for front ends that receive commands as
//! events rather than by blocking on input.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, info};

use super::events::{EventSink, GameEvent};
use super::persistence::SnapshotStore;
use super::state::GameState;
use super::turn::Phase;
use crate::core::{GameError, PlayerId, SetupError, MAX_PLAYERS, MIN_PLAYERS};
use crate::definitions::Currency;
use crate::rules::{
    available_verbs, movement, upgrade, validate, work, ActionContext, ActionOutcome, Argument,
    Command, GameResult, ParseError,
};

/// What the controller is asking for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    PlayerCount,

    /// A command line from the active player.
    Command { player: PlayerId },

    /// A missing argument, with the choices that would be accepted.
    Argument {
        player: PlayerId,
        argument: Argument,
        options: Vec<String>,
    },
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::PlayerCount => write!(f, "How many players? ({}-{}) ", MIN_PLAYERS, MAX_PLAYERS),
            Prompt::Command { player } => write!(f, "{}> ", player),
            Prompt::Argument {
                argument, options, ..
            } if options.is_empty() => write!(f, "Enter {}: ", argument),
            Prompt::Argument {
                argument, options, ..
            } => write!(f, "Enter {} [{}]: ", argument, options.join(", ")),
        }
    }
}

/// Where player input comes from.
pub trait InputSource {
    /// Next line for `prompt`, or `None` once input is closed.
    fn read(&mut self, prompt: &Prompt) -> Option<String>;
}

/// Replays a fixed list of lines and remembers the prompts it was given.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<Prompt>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    #[must_use]
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self, prompt: &Prompt) -> Option<String> {
        self.prompts.push(prompt.clone());
        self.lines.pop_front()
    }
}

/// Ask for a player count until a valid one arrives.
///
/// Returns `None` if input closes first.
pub fn read_player_count(input: &mut dyn InputSource, out: &mut dyn EventSink) -> Option<usize> {
    loop {
        let line = input.read(&Prompt::PlayerCount)?;
        match line.trim().parse::<usize>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return Some(count),
            Ok(count) => out.message(SetupError::InvalidPlayerCount(count).to_string()),
            Err(_) => out.message(format!("{:?} is not a number", line.trim())),
        }
    }
}

/// Where the game stands after the controller has done all it can.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    AwaitingCommand(PlayerId),
    GameOver(GameResult),
    Quit,
}

/// Drives one game.
#[derive(Debug)]
pub struct GameController<S> {
    game: GameState,
    store: S,
}

impl<S: SnapshotStore> GameController<S> {
    #[must_use]
    pub fn new(game: GameState, store: S) -> Self {
        Self { game, store }
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_game(self) -> GameState {
        self.game
    }

    /// Announce the current day and run up to the first command prompt.
    pub fn start(&mut self, out: &mut dyn EventSink) -> Result<Step, GameError> {
        self.announce(out);
        self.settle(out)
    }

    /// Validate and execute one command for the active player.
    ///
    /// A rejected command is reported as a message and the same player is
    /// asked again.
    pub fn submit(&mut self, command: Command, out: &mut dyn EventSink) -> Result<Step, GameError> {
        let Some(player) = self.game.active_player() else {
            return self.settle(out);
        };

        let validated = match validate(command, &self.game) {
            Ok(validated) => validated,
            Err(rejection) => {
                debug!(player = %player, %rejection, "command rejected");
                out.message(rejection.to_string());
                return Ok(Step::AwaitingCommand(player));
            }
        };

        let outcome = {
            let mut ctx = ActionContext {
                out: &mut *out,
                store: &mut self.store,
            };
            validated.execute(&mut self.game, &mut ctx)?
        };

        match outcome {
            ActionOutcome::Continue => {
                self.offer_actions(player, out);
                Ok(Step::AwaitingCommand(player))
            }
            ActionOutcome::EndTurn => {
                self.game.end_turn();
                self.settle(out)
            }
            ActionOutcome::Restored => {
                self.announce(out);
                self.settle(out)
            }
            ActionOutcome::Quit => Ok(Step::Quit),
        }
    }

    /// Play until the game ends, a player quits or input runs out.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        out: &mut dyn EventSink,
    ) -> Result<Step, GameError> {
        let mut step = self.start(out)?;
        loop {
            let Step::AwaitingCommand(player) = step else {
                return Ok(step);
            };
            let Some(line) = input.read(&Prompt::Command { player }) else {
                info!("input closed");
                return Ok(Step::Quit);
            };
            match self.complete(&line, player, input) {
                Ok(Some(command)) => step = self.submit(command, out)?,
                Ok(None) => {
                    info!("input closed");
                    return Ok(Step::Quit);
                }
                Err(e) => out.message(e.to_string()),
            }
        }
    }

    /// Parse `line`, asking `input` for any missing arguments.
    ///
    /// `Ok(None)` means input closed part way. An empty answer abandons
    /// the command.
    pub fn complete(
        &self,
        line: &str,
        player: PlayerId,
        input: &mut dyn InputSource,
    ) -> Result<Option<Command>, ParseError> {
        let mut line = line.trim().to_string();
        loop {
            match Command::parse(&line) {
                Ok(command) => return Ok(Some(command)),
                Err(ParseError::Missing { verb, argument }) => {
                    let prompt = Prompt::Argument {
                        player,
                        argument,
                        options: self.options(player, argument),
                    };
                    let Some(answer) = input.read(&prompt) else {
                        return Ok(None);
                    };
                    let answer = answer.trim();
                    if answer.is_empty() {
                        return Err(ParseError::Missing { verb, argument });
                    }
                    line = format!("{} {}", line, answer);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Accepted values for a missing argument.
    #[must_use]
    pub fn options(&self, player: PlayerId, argument: Argument) -> Vec<String> {
        let game = &self.game;
        match argument {
            Argument::Destination => movement::destinations(game, player),
            Argument::Role => work::open_roles(game, player),
            Argument::TargetRank => upgrade::affordable_ranks(game, player)
                .into_iter()
                .map(|rank| rank.to_string())
                .collect(),
            Argument::Currency { rank } => upgrade::affordable_currencies(game, player, rank)
                .into_iter()
                .map(|c: Currency| c.token().to_string())
                .collect(),
            Argument::SaveName => Vec::new(),
        }
    }

    fn announce(&self, out: &mut dyn EventSink) {
        match self.game.phase() {
            Phase::GameOver => {}
            Phase::TurnInProgress { day, player } => {
                self.game.announce_day(day, out);
                out.emit(GameEvent::TurnStarted { day, player });
            }
            Phase::DayInProgress { day, .. } | Phase::DayComplete { day, .. } => {
                self.game.announce_day(day, out);
            }
        }
    }

    /// Advance until someone has to act or the game is over.
    fn settle(&mut self, out: &mut dyn EventSink) -> Result<Step, GameError> {
        loop {
            match self.game.phase() {
                Phase::TurnInProgress { player, .. } => {
                    self.offer_actions(player, out);
                    return Ok(Step::AwaitingCommand(player));
                }
                Phase::GameOver => return Ok(Step::GameOver(self.game.result())),
                Phase::DayInProgress { .. } | Phase::DayComplete { .. } => {
                    self.game.advance(out)?;
                }
            }
        }
    }

    fn offer_actions(&self, player: PlayerId, out: &mut dyn EventSink) {
        out.emit(GameEvent::ActionsCleared);
        out.emit(GameEvent::ActionsAvailable {
            player,
            verbs: available_verbs(&self.game, player),
        });
    }
}
