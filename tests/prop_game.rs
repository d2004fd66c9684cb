//! Property-based tests for deck, board and payout invariants.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use deadwood::{Command, GameBuilder, GameController, GameState, MemoryStore, NullSink, PlayerId};

/// Every location name that currently has a scene, in board order.
fn scene_locations(game: &GameState) -> Vec<String> {
    game.locations
        .iter()
        .filter(|l| game.board.scene_card(&l.name).is_some())
        .map(|l| l.name.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Cards are never lost or duplicated, whatever gets wrapped.
    #[test]
    fn prop_deck_partition_holds(
        seed in any::<u64>(),
        players in 2usize..=8,
        wraps in 0usize..9,
    ) {
        let mut game = GameBuilder::new(players).seed(seed).build().unwrap();
        let names = scene_locations(&game);

        for name in names.iter().take(wraps) {
            let mut location = game.locations.get(name).unwrap().clone();
            game.board
                .wrap_scene(
                    PlayerId::new(1),
                    &mut game.players,
                    &mut game.deck,
                    &mut location,
                    &mut game.rng,
                )
                .unwrap();
            *game.locations.get_mut(name).unwrap() = location;
        }

        prop_assert!(game.deck.check_partition().is_ok());
        prop_assert_eq!(
            game.deck.undrawn_count() + game.deck.drawn_count() + game.deck.discarded_count(),
            game.deck.total()
        );
        prop_assert_eq!(game.deck.discarded_count(), wraps);
        prop_assert_eq!(game.board.scenes_remaining() as usize, 10 - wraps);
        prop_assert!(game.board.check_consistency(&game.deck, &game.locations).is_ok());
    }

    /// Wrap pay is exactly the bonus dice plus each off-card role's rank.
    #[test]
    fn prop_wrap_pays_dice_and_ranks(seed in any::<u64>(), on_card in 1usize..=3) {
        let mut game = GameBuilder::new(8).seed(seed).build().unwrap();
        let name = "Train Station";
        let card_roles: Vec<String> = game
            .board
            .scene_card_roles(name, &game.deck)
            .unwrap()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        let on_card = on_card.min(card_roles.len());

        let off_card = [("Crusty Prospector", 1u32), ("Preacher with Bag", 2), ("Cyrus the Gunfighter", 4)];
        let mut seat = 1u8;
        for role in card_roles.iter().take(on_card) {
            let id = PlayerId::new(seat);
            game.board.set_player_location(id, name);
            game.board.set_player_role(id, Some(role.clone()));
            seat += 1;
        }
        for (role, _) in off_card {
            let id = PlayerId::new(seat);
            game.board.set_player_location(id, name);
            game.board.set_player_role(id, Some(role.to_string()));
            seat += 1;
        }

        let mut location = game.locations.get(name).unwrap().clone();
        let budget = game.scene_budget(name).unwrap();
        let report = game
            .board
            .wrap_scene(
                PlayerId::new(1),
                &mut game.players,
                &mut game.deck,
                &mut location,
                &mut game.rng,
            )
            .unwrap();

        let dice: u32 = report.bonus_rolls.iter().map(|&d| u32::from(d)).sum();
        let ranks: u32 = off_card.iter().map(|(_, rank)| rank).sum();
        let paid: u32 = report.payouts.iter().map(|p| p.dollars).sum();
        let held: u32 = game.players.iter().map(|(_, p)| p.dollars).sum();

        prop_assert_eq!(report.bonus_rolls.len(), usize::from(budget));
        prop_assert!(report.bonus_rolls.iter().all(|&d| (1..=6).contains(&d)));
        prop_assert_eq!(paid, dice + ranks);
        prop_assert_eq!(held, paid);
    }

    /// Two games from the same seed and the same commands stay identical.
    #[test]
    fn prop_same_seed_same_game(seed in any::<u64>(), ends in 0usize..12) {
        let play = || {
            let game = GameBuilder::new(3).seed(seed).build().unwrap();
            let mut ctl = GameController::new(game, MemoryStore::new());
            ctl.start(&mut NullSink).unwrap();
            ctl.submit(Command::Move { destination: "Saloon".to_string() }, &mut NullSink).unwrap();
            for _ in 0..ends {
                ctl.submit(Command::End, &mut NullSink).unwrap();
            }
            ctl.into_game()
        };

        let (a, b) = (play(), play());
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}
