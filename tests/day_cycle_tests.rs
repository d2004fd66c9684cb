//! Day and turn cycle tests.
//!
//! These drive whole games through `GameState::advance` and check that
//! days end when one scene is left, that the board is reset and redealt
//! between days, and that the game stops after the last day.

use deadwood::core::TRAILER;
use deadwood::{GameBuilder, GameEvent, GameState, NullSink, Phase, PlayerId};

/// Wrap every scene on the board except one, without paying anyone.
fn wrap_all_but_one(game: &mut GameState) {
    let with_scene: Vec<String> = game
        .locations
        .iter()
        .filter(|l| game.board.scene_card(&l.name).is_some())
        .map(|l| l.name.clone())
        .collect();

    for name in with_scene.iter().skip(1) {
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
}

/// Advance until a turn starts or the game ends.
fn settle(game: &mut GameState, events: &mut Vec<GameEvent>) -> Phase {
    loop {
        let phase = game.advance(events).unwrap();
        if matches!(phase, Phase::TurnInProgress { .. } | Phase::GameOver) {
            return phase;
        }
    }
}

#[test]
fn test_turns_rotate_through_every_seat() {
    let mut game = GameBuilder::new(4).seed(5).build().unwrap();
    let mut events = Vec::new();

    let mut seen = Vec::new();
    for _ in 0..9 {
        match settle(&mut game, &mut events) {
            Phase::TurnInProgress { player, day } => {
                assert_eq!(day, 1);
                seen.push(player.0);
            }
            other => panic!("unexpected phase {:?}", other),
        }
        game.end_turn();
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 1, 2, 3, 4, 1]);
}

#[test]
fn test_only_active_player_is_flagged() {
    let mut game = GameBuilder::new(3).seed(5).build().unwrap();
    settle(&mut game, &mut Vec::new());
    game.end_turn();
    settle(&mut game, &mut Vec::new());

    let active: Vec<_> = game
        .players
        .iter()
        .filter(|(_, p)| p.flags.active)
        .map(|(id, _)| id)
        .collect();
    assert_eq!(active, vec![PlayerId::new(2)]);
    assert_eq!(game.active_player(), Some(PlayerId::new(2)));
}

#[test]
fn test_day_ends_with_one_scene_left() {
    let mut game = GameBuilder::new(2).seed(9).build().unwrap();
    settle(&mut game, &mut Vec::new());

    // Send someone off and give them a role so the reset is visible
    let p1 = PlayerId::new(1);
    game.board.set_player_location(p1, "Hotel");
    game.board
        .set_player_role(p1, Some("Faro Player".to_string()));
    game.locations
        .get_mut("Hotel")
        .unwrap()
        .role_mut("Faro Player")
        .unwrap()
        .occupied = true;
    game.players[p1].rehearsal_tokens = 2;

    game.end_turn();
    wrap_all_but_one(&mut game);
    assert_eq!(game.board.scenes_remaining(), 1);

    let mut events = Vec::new();
    let phase = settle(&mut game, &mut events);

    // Player 1 ended their turn, so player 2 opens day 2
    assert_eq!(
        phase,
        Phase::TurnInProgress {
            day: 2,
            player: PlayerId::new(2)
        }
    );
    assert!(events.contains(&GameEvent::DayEnded { day: 1 }));
    assert!(events.contains(&GameEvent::DayStarted { day: 2, num_days: 3 }));

    for (id, player) in game.players.iter() {
        assert_eq!(game.board.player_location(id), Some(TRAILER));
        assert_eq!(game.board.player_role(id), None);
        assert_eq!(player.rehearsal_tokens, 0);
    }
    for location in game.locations.iter() {
        assert!(!location.is_wrapped());
        assert!(location.all_roles().all(|r| !r.occupied));
        assert_eq!(location.shots(), location.takes().len());
    }

    assert_eq!(game.board.scenes_remaining(), 10);
    assert_eq!(game.deck.drawn_count(), 10);
    assert_eq!(game.deck.discarded_count(), 10);
    assert_eq!(game.deck.undrawn_count(), 20);
    assert!(game.board.check_consistency(&game.deck, &game.locations).is_ok());
}

#[test]
fn test_game_over_after_last_day() {
    let mut game = GameBuilder::new(3).seed(2).build().unwrap();
    game.players[PlayerId::new(3)].dollars = 7;
    let mut events = Vec::new();

    for day in 1..=3 {
        match settle(&mut game, &mut events) {
            Phase::TurnInProgress { day: d, .. } => assert_eq!(d, day),
            other => panic!("day {} ended early: {:?}", day, other),
        }
        game.end_turn();
        wrap_all_but_one(&mut game);
    }
    let phase = settle(&mut game, &mut events);

    assert_eq!(phase, Phase::GameOver);
    assert!(events.contains(&GameEvent::DayEnded { day: 3 }));
    assert!(!events.contains(&GameEvent::DayStarted { day: 4, num_days: 3 }));
    match events.last() {
        Some(GameEvent::ScoresShown(standings)) => {
            assert_eq!(standings.len(), 3);
            assert_eq!(standings[0].player, PlayerId::new(3));
            assert_eq!(standings[0].score, 12);
            assert!(standings[0].winner);
            assert!(!standings[1].winner);
        }
        other => panic!("expected final scores, got {:?}", other),
    }

    // A finished game stays finished
    let before = game.snapshot();
    assert_eq!(game.advance(&mut NullSink).unwrap(), Phase::GameOver);
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.active_player(), None);
    assert!(game.result().is_winner(PlayerId::new(3)));
}

#[test]
fn test_game_length_by_player_count() {
    for (players, days) in [(2, 3), (3, 3), (4, 4), (6, 4), (8, 4)] {
        let mut game = GameBuilder::new(players).seed(1).build().unwrap();
        let mut played = 0;
        loop {
            match settle(&mut game, &mut Vec::new()) {
                Phase::TurnInProgress { .. } => {
                    played += 1;
                    game.end_turn();
                    wrap_all_but_one(&mut game);
                }
                Phase::GameOver => break,
                other => panic!("unexpected phase {:?}", other),
            }
        }
        assert_eq!(played, days, "days for {} players", players);
        assert_eq!(game.deck.drawn_count(), 0);
        assert_eq!(game.deck.discarded_count(), 10 * days as usize);
    }
}
