//! Assembling a new game.

use im::Vector;
use tracing::info;

use super::state::GameState;
use super::turn::Phase;
use crate::board::{Board, Locations};
use crate::cards::Deck;
use crate::core::{GameConfig, GameRng, Player, PlayerId, PlayerMap, SetupError, TRAILER};
use crate::definitions::{standard_board, BoardDefinition};

/// Builder for a [`GameState`].
///
/// ```
/// use deadwood::game::GameBuilder;
///
/// let game = GameBuilder::new(4).seed(42).build().unwrap();
/// assert_eq!(game.num_days(), 4);
/// assert_eq!(game.board.scenes_remaining(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    player_count: usize,
    seed: u64,
    definition: Option<BoardDefinition>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: 0,
            definition: None,
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Play on `definition` instead of the standard board.
    #[must_use]
    pub fn definition(mut self, definition: BoardDefinition) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Check the setup, shuffle the deck and deal the first day.
    ///
    /// Every player starts in the Trailer. No turn has started yet: the
    /// game is between turns on day 1 with player 1 up next.
    pub fn build(self) -> Result<GameState, SetupError> {
        let config = GameConfig::for_players(self.player_count, self.seed)?;
        let definition = self.definition.unwrap_or_else(standard_board);
        definition.validate(config.num_days)?;

        let mut rng = GameRng::new(config.seed);
        let mut deck = Deck::shuffled(definition.cards, &mut rng);
        let mut locations = Locations::from(definition.locations);

        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.starting_rank, config.starting_credits)
        });
        let mut board = Board::new();
        for id in players.player_ids() {
            board.set_player_location(id, TRAILER);
        }
        let dealt = board.deal_scene_cards(&mut deck, &mut locations)?;

        info!(
            players = config.player_count,
            days = config.num_days,
            seed = config.seed,
            scenes = dealt,
            "game created"
        );

        Ok(GameState {
            phase: Phase::DayInProgress {
                day: 1,
                next: PlayerId::new(1),
            },
            players,
            board,
            deck,
            locations,
            upgrades: definition.upgrades,
            rng,
            history: Vector::new(),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SetupError;

    #[test]
    fn test_build_deals_first_day() {
        let game = GameBuilder::new(6).seed(3).build().unwrap();

        assert_eq!(game.player_count(), 6);
        assert_eq!(game.deck.drawn_count(), 10);
        assert_eq!(game.deck.undrawn_count(), 30);
        for (id, player) in game.players.iter() {
            assert_eq!(player.rank, 1);
            assert_eq!(player.credits, 4);
            assert_eq!(game.board.player_location(id), Some(TRAILER));
        }
        assert!(game.board.check_consistency(&game.deck, &game.locations).is_ok());
        assert_eq!(game.active_player(), None);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameBuilder::new(3).seed(11).build().unwrap();
        let b = GameBuilder::new(3).seed(11).build().unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_invalid_player_count() {
        assert_eq!(
            GameBuilder::new(1).build().unwrap_err(),
            SetupError::InvalidPlayerCount(1)
        );
        assert_eq!(
            GameBuilder::new(9).build().unwrap_err(),
            SetupError::InvalidPlayerCount(9)
        );
    }

    #[test]
    fn test_small_deck_rejected() {
        let mut definition = standard_board();
        definition.cards.truncate(35);

        assert_eq!(
            GameBuilder::new(4).definition(definition).build().unwrap_err(),
            SetupError::NotEnoughCards {
                needed: 40,
                available: 35
            }
        );
    }
}
