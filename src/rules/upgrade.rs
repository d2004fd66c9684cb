//! Buying rank at the Casting Office.

use tracing::info;

use super::action::{ActionContext, ActionOutcome, PlayerAction, Proof};
use super::command::Verb;
use super::rejection::Rejection;
use crate::core::{GameError, Player, PlayerId, CASTING_OFFICE, MAX_RANK};
use crate::definitions::Currency;
use crate::game::{GameEvent, GameState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeAction {
    /// Rank to buy.
    pub rank: u8,
    pub currency: Currency,
}

fn balance(player: &Player, currency: Currency) -> u32 {
    match currency {
        Currency::Dollars => player.dollars,
        Currency::Credits => player.credits,
    }
}

/// Conditions on the player before a target rank is named.
pub(crate) fn check_can_upgrade(game: &GameState, player: PlayerId) -> Result<(), Rejection> {
    if game.board.player_location(player) != Some(CASTING_OFFICE) {
        return Err(Rejection::NotAtCastingOffice);
    }
    let p = &game.players[player];
    if p.rank >= MAX_RANK {
        return Err(Rejection::MaxRank);
    }
    if p.flags.has_upgraded {
        return Err(Rejection::AlreadyUpgraded);
    }
    Ok(())
}

/// Check that `player` can pay for `rank` in `currency`, returning the cost.
fn check_price(
    game: &GameState,
    player: PlayerId,
    rank: u8,
    currency: Currency,
) -> Result<u32, Rejection> {
    let p = &game.players[player];
    if rank <= p.rank || rank > MAX_RANK {
        return Err(Rejection::InvalidTargetRank {
            target: rank,
            rank: p.rank,
        });
    }
    let cost = game
        .upgrades
        .cost(rank, currency)
        .ok_or(Rejection::InvalidTargetRank {
            target: rank,
            rank: p.rank,
        })?;
    let available = balance(p, currency);
    if available < cost {
        return Err(Rejection::CannotAfford {
            rank,
            currency,
            cost,
            available,
        });
    }
    Ok(cost)
}

/// Currencies `player` could pay for `rank` with.
#[must_use]
pub fn affordable_currencies(game: &GameState, player: PlayerId, rank: u8) -> Vec<Currency> {
    Currency::ALL
        .into_iter()
        .filter(|&c| check_price(game, player, rank, c).is_ok())
        .collect()
}

/// Ranks `player` could buy right now in some currency.
#[must_use]
pub fn affordable_ranks(game: &GameState, player: PlayerId) -> Vec<u8> {
    if check_can_upgrade(game, player).is_err() {
        return Vec::new();
    }
    let current = game.players[player].rank;
    (current + 1..=MAX_RANK)
        .filter(|&rank| !affordable_currencies(game, player, rank).is_empty())
        .collect()
}

impl PlayerAction for UpgradeAction {
    fn verb(&self) -> Verb {
        Verb::Upgrade
    }

    fn validate(&self, game: &GameState, player: PlayerId) -> Result<(), Rejection> {
        check_can_upgrade(game, player)?;
        check_price(game, player, self.rank, self.currency).map(|_| ())
    }

    fn execute(
        &self,
        game: &mut GameState,
        player: PlayerId,
        ctx: &mut ActionContext<'_>,
        _proof: Proof,
    ) -> Result<ActionOutcome, GameError> {
        let cost = game.upgrades.cost(self.rank, self.currency).unwrap_or(0);
        let p = &mut game.players[player];
        match self.currency {
            Currency::Dollars => p.dollars = p.dollars.saturating_sub(cost),
            Currency::Credits => p.credits = p.credits.saturating_sub(cost),
        }
        p.rank = self.rank;
        p.flags.has_upgraded = true;

        info!(player = %player, rank = p.rank, cost, currency = %self.currency, "upgraded");
        ctx.out.emit(GameEvent::PlayerUpdated {
            player,
            rank: p.rank,
            dollars: p.dollars,
            credits: p.credits,
        });

        Ok(ActionOutcome::end_turn_if(p.flags.has_moved))
    }
}
