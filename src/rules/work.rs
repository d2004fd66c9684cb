//! Taking a role.

use tracing::debug;

use super::action::{ActionContext, ActionOutcome, PlayerAction, Proof};
use super::command::Verb;
use super::rejection::Rejection;
use crate::core::{GameError, PlayerId};
use crate::game::{GameEvent, GameState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkAction {
    pub role: String,
}

/// Conditions on the player and their location, before a role is named.
pub(crate) fn check_can_work(game: &GameState, player: PlayerId) -> Result<(), Rejection> {
    let name = game.board.player_location(player).unwrap_or_default();
    let location = game
        .locations
        .get(name)
        .ok_or_else(|| Rejection::UnknownLocation(name.to_string()))?;

    if location.is_reserved() {
        return Err(Rejection::ReservedLocation(location.name.clone()));
    }
    if location.is_wrapped() {
        return Err(Rejection::SceneWrapped(location.name.clone()));
    }
    if let Some(role) = game.board.player_role(player) {
        return Err(Rejection::HasRole(role.to_string()));
    }
    Ok(())
}

/// Roles `player` could take where they stand.
#[must_use]
pub fn open_roles(game: &GameState, player: PlayerId) -> Vec<String> {
    if check_can_work(game, player).is_err() {
        return Vec::new();
    }
    let rank = game.players[player].rank;
    game.player_location(player)
        .map(|location| {
            location
                .available_roles(rank)
                .map(|role| role.name.clone())
                .collect()
        })
        .unwrap_or_default()
}

impl PlayerAction for WorkAction {
    fn verb(&self) -> Verb {
        Verb::Work
    }

    fn validate(&self, game: &GameState, player: PlayerId) -> Result<(), Rejection> {
        check_can_work(game, player)?;

        let role = game
            .player_location(player)
            .and_then(|location| location.role(&self.role))
            .ok_or_else(|| Rejection::UnknownRole(self.role.clone()))?;
        if role.occupied {
            return Err(Rejection::RoleOccupied(role.name.clone()));
        }
        let rank = game.players[player].rank;
        if role.rank > rank {
            return Err(Rejection::RankTooLow {
                role: role.name.clone(),
                needed: role.rank,
                rank,
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
        let name = game
            .board
            .player_location(player)
            .map(str::to_string)
            .unwrap_or_default();
        let location = game
            .locations
            .get_mut(&name)
            .ok_or_else(|| GameError::UnknownLocation(name.clone()))?;
        if let Some(role) = location.role_mut(&self.role) {
            role.occupied = true;
        }
        game.board.set_player_role(player, Some(self.role.clone()));

        let flags = &mut game.players[player].flags;
        flags.has_worked = true;

        debug!(player = %player, role = %self.role, location = %name, "took role");
        ctx.out.emit(GameEvent::RoleTaken {
            player,
            role: self.role.clone(),
            location: name,
        });

        Ok(ActionOutcome::end_turn_if(flags.has_moved))
    }
}
