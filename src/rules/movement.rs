//! Walking between neighboring locations.

use tracing::debug;

use super::action::{ActionContext, ActionOutcome, PlayerAction, Proof};
use super::command::Verb;
use super::rejection::Rejection;
use crate::core::{GameError, PlayerId};
use crate::game::{GameEvent, GameState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub destination: String,
}

/// A player may move once per turn, and only while not working a role.
pub(crate) fn check_can_move(game: &GameState, player: PlayerId) -> Result<(), Rejection> {
    if let Some(role) = game.board.player_role(player) {
        return Err(Rejection::HasRole(role.to_string()));
    }
    if game.players[player].flags.has_moved {
        return Err(Rejection::AlreadyMoved);
    }
    Ok(())
}

/// Names of the locations `player` can walk to.
#[must_use]
pub fn destinations(game: &GameState, player: PlayerId) -> Vec<String> {
    game.player_location(player)
        .map(|location| location.neighbors.to_vec())
        .unwrap_or_default()
}

impl PlayerAction for MoveAction {
    fn verb(&self) -> Verb {
        Verb::Move
    }

    fn validate(&self, game: &GameState, player: PlayerId) -> Result<(), Rejection> {
        check_can_move(game, player)?;
        if !game.locations.contains(&self.destination) {
            return Err(Rejection::UnknownLocation(self.destination.clone()));
        }
        let here = game.player_location(player).ok_or_else(|| {
            Rejection::UnknownLocation(game.board.player_location(player).unwrap_or("").to_string())
        })?;
        if !here.is_neighbor(&self.destination) {
            return Err(Rejection::NotAdjacent {
                from: here.name.clone(),
                to: self.destination.clone(),
            });
        }
        Ok(())
    }

    fn execute(
        &self,
        game: &mut GameState,
        player: PlayerId,
        ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        game.board.set_player_location(player, self.destination.clone());
        let flags = &mut game.players[player].flags;
        flags.has_moved = true;

        debug!(player = %player, to = %self.destination, "moved");
        ctx.out.emit(GameEvent::PlayerMoved {
            player,
            location: self.destination.clone(),
        });

        Ok(ActionOutcome::end_turn_if(flags.has_upgraded))
    }
}
