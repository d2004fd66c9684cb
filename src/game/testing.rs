//! Shortcuts for unit tests.

use super::{EventSink, GameBuilder, GameEvent, GameState, MemoryStore, NullSink};
use crate::core::PlayerId;
use crate::rules::{validate, ActionContext, ActionOutcome, Command};

/// A standard game with player 1's turn underway.
pub(crate) fn started_game_with_seed(players: usize, seed: u64) -> GameState {
    let mut game = GameBuilder::new(players).seed(seed).build().unwrap();
    game.advance(&mut NullSink).unwrap();
    game
}

pub(crate) fn started_game(players: usize) -> GameState {
    started_game_with_seed(players, 7)
}

pub(crate) fn place(game: &mut GameState, player: PlayerId, location: &str) {
    game.board.set_player_location(player, location);
}

/// Put `player` in `role` at `location`, skipping every rule check.
pub(crate) fn take_role(game: &mut GameState, player: PlayerId, location: &str, role: &str) {
    place(game, player, location);
    game.board.set_player_role(player, Some(role.to_string()));
    game.locations
        .get_mut(location)
        .unwrap()
        .role_mut(role)
        .unwrap()
        .occupied = true;
}

/// Validate and execute `command` for the active player. Panics on rejection.
pub(crate) fn run(game: &mut GameState, command: Command) -> (ActionOutcome, Vec<GameEvent>) {
    run_with_store(game, &mut MemoryStore::new(), command)
}

pub(crate) fn run_with_store(
    game: &mut GameState,
    store: &mut MemoryStore,
    command: Command,
) -> (ActionOutcome, Vec<GameEvent>) {
    let validated = validate(command, game).unwrap();
    let mut events: Vec<GameEvent> = Vec::new();
    let outcome = {
        let out: &mut dyn EventSink = &mut events;
        let mut ctx = ActionContext { out, store };
        validated.execute(game, &mut ctx).unwrap()
    };
    (outcome, events)
}
