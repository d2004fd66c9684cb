//! Rehearsing and acting.
//!
//! An acting roll is one die plus the player's rehearsal tokens, against
//! the scene's budget. Pay depends on the outcome and on whether the role
//! comes from the scene card:
//!
//! | Outcome | On card   | Off card      |
//! |---------|-----------|---------------|
//! | success | 2 credits | $1 + 1 credit |
//! | failure | nothing   | $1            |
//!
//! A success also shoots one take. Shooting the last take wraps the scene.

use tracing::{debug, info};

use super::action::{ActionContext, ActionOutcome, PlayerAction, Proof};
use super::command::Verb;
use super::rejection::Rejection;
use crate::core::{GameError, PlayerId};
use crate::game::{GameEvent, GameState};

fn check_has_role(game: &GameState, player: PlayerId) -> Result<(), Rejection> {
    match game.board.player_role(player) {
        Some(_) => Ok(()),
        None => Err(Rejection::NoRole),
    }
}

fn emit_player(game: &GameState, player: PlayerId, ctx: &mut ActionContext<'_>) {
    let p = &game.players[player];
    ctx.out.emit(GameEvent::PlayerUpdated {
        player,
        rank: p.rank,
        dollars: p.dollars,
        credits: p.credits,
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RehearseAction;

impl PlayerAction for RehearseAction {
    fn verb(&self) -> Verb {
        Verb::Rehearse
    }

    fn validate(&self, game: &GameState, player: PlayerId) -> Result<(), Rejection> {
        check_has_role(game, player)
    }

    fn execute(
        &self,
        game: &mut GameState,
        player: PlayerId,
        ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        let p = &mut game.players[player];
        p.rehearsal_tokens += 1;

        debug!(player = %player, tokens = p.rehearsal_tokens, "rehearsed");
        ctx.out.emit(GameEvent::Rehearsed {
            player,
            tokens: p.rehearsal_tokens,
        });
        Ok(ActionOutcome::EndTurn)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActAction;

impl PlayerAction for ActAction {
    fn verb(&self) -> Verb {
        Verb::Act
    }

    fn validate(&self, game: &GameState, player: PlayerId) -> Result<(), Rejection> {
        check_has_role(game, player)
    }

    fn execute(
        &self,
        game: &mut GameState,
        player: PlayerId,
        ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        let location_name = game
            .board
            .player_location(player)
            .map(str::to_string)
            .unwrap_or_default();
        let role = game.current_role(player).cloned().ok_or_else(|| GameError::RoleNotFound {
            player,
            role: game.board.player_role(player).unwrap_or_default().to_string(),
        })?;
        let budget = game
            .scene_budget(&location_name)
            .ok_or_else(|| GameError::CardNotInPlay(location_name.clone()))?;

        let die = game.rng.roll_die();
        let p = &mut game.players[player];
        let tokens = p.rehearsal_tokens;
        let success = u32::from(die) + tokens >= u32::from(budget);

        match (success, role.on_card) {
            (true, true) => p.credits += 2,
            (true, false) => {
                p.dollars += 1;
                p.credits += 1;
            }
            (false, true) => {}
            (false, false) => p.dollars += 1,
        }

        debug!(player = %player, die, tokens, budget, success, "acted");
        ctx.out.emit(GameEvent::DiceRolled {
            player,
            die,
            tokens,
            budget,
            success,
        });
        emit_player(game, player, ctx);

        if !success {
            return Ok(ActionOutcome::EndTurn);
        }

        let location = game
            .locations
            .get_mut(&location_name)
            .ok_or_else(|| GameError::UnknownLocation(location_name.clone()))?;
        if let Some(take) = location.wrap_shot() {
            ctx.out.emit(GameEvent::ShotRemoved {
                location: location_name.clone(),
                take,
                remaining: location.shots(),
            });
        }

        if location.shots() == 0 {
            let report = game.board.wrap_scene(
                player,
                &mut game.players,
                &mut game.deck,
                location,
                &mut game.rng,
            )?;
            info!(location = %location_name, payouts = report.payouts.len(), "wrap payouts made");
            for payout in &report.payouts {
                emit_player(game, payout.player, ctx);
            }
            ctx.out.emit(GameEvent::SceneWrapped(report));
        }

        Ok(ActionOutcome::EndTurn)
    }
}
