//! Command line tests: parsing, argument prompts, upgrades, the
//! informational commands and final scoring.

use deadwood::core::CASTING_OFFICE;
use deadwood::game::Step;
use deadwood::rules::Argument;
use deadwood::{
    Command, GameBuilder, GameController, GameEvent, GameResult, GameState, MemoryStore,
    NullSink, PlayerId, Prompt, ScriptedInput, Verb,
};

fn at_casting_office(players: usize, dollars: u32, credits: u32) -> GameState {
    let mut game = GameBuilder::new(players).seed(4).build().unwrap();
    let p1 = PlayerId::new(1);
    game.board.set_player_location(p1, CASTING_OFFICE);
    game.players[p1].dollars = dollars;
    game.players[p1].credits = credits;
    game
}

fn play(game: GameState, lines: &[&str]) -> (GameController<MemoryStore>, ScriptedInput, Vec<GameEvent>) {
    let mut ctl = GameController::new(game, MemoryStore::new());
    let mut input = ScriptedInput::new(lines.iter().copied());
    let mut events = Vec::new();
    ctl.run(&mut input, &mut events).unwrap();
    (ctl, input, events)
}

#[test]
fn test_upgrade_with_exact_dollars() {
    let game = at_casting_office(2, 4, 0);
    let (ctl, _, events) = play(game, &["upgrade 2 $"]);

    let p1 = &ctl.game().players[PlayerId::new(1)];
    assert_eq!(p1.rank, 2);
    assert_eq!(p1.dollars, 0);
    assert!(events.contains(&GameEvent::PlayerUpdated {
        player: PlayerId::new(1),
        rank: 2,
        dollars: 0,
        credits: 0
    }));
}

#[test]
fn test_upgrade_short_in_both_currencies() {
    let game = at_casting_office(2, 3, 4);
    let (ctl, _, events) = play(game, &["upgrade 2 $", "upgrade 2 cr"]);

    let p1 = &ctl.game().players[PlayerId::new(1)];
    assert_eq!((p1.rank, p1.dollars, p1.credits), (1, 3, 4));
    assert!(events.contains(&GameEvent::Message(
        "rank 2 costs 4 dollars, you have 3".to_string()
    )));
    assert!(events.contains(&GameEvent::Message(
        "rank 2 costs 5 credits, you have 4".to_string()
    )));
    assert!(ctl.game().history().is_empty());
}

#[test]
fn test_upgrade_prompts_for_rank_and_currency() {
    let game = at_casting_office(2, 10, 5);
    let (ctl, input, _) = play(game, &["upgrade", "3", "$"]);

    assert_eq!(ctl.game().players[PlayerId::new(1)].rank, 3);
    assert_eq!(ctl.game().players[PlayerId::new(1)].dollars, 0);

    let asked: Vec<_> = input
        .prompts()
        .iter()
        .filter_map(|p| match p {
            Prompt::Argument { argument, options, .. } => Some((*argument, options.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        asked,
        vec![
            (Argument::TargetRank, vec!["2".to_string(), "3".to_string()]),
            (Argument::Currency { rank: 3 }, vec!["$".to_string()]),
        ]
    );
}

#[test]
fn test_credits_can_skip_ranks() {
    let game = at_casting_office(6, 0, 10);
    let (ctl, _, _) = play(game, &["upgrade cr 3"]);

    let p1 = &ctl.game().players[PlayerId::new(1)];
    assert_eq!(p1.rank, 3);
    assert_eq!(p1.credits, 0);
}

#[test]
fn test_move_then_upgrade_ends_turn() {
    let mut game = GameBuilder::new(3).seed(4).build().unwrap();
    let p1 = PlayerId::new(1);
    game.board.set_player_location(p1, "Ranch");
    game.players[p1].dollars = 4;

    let (ctl, input, _) = play(game, &["move Casting Office", "upgrade 2 dollars"]);

    assert_eq!(ctl.game().players[p1].rank, 2);
    assert_eq!(
        input.prompts().last(),
        Some(&Prompt::Command {
            player: PlayerId::new(2)
        })
    );
    let verbs: Vec<_> = ctl.game().history().iter().map(|r| r.command.verb()).collect();
    assert_eq!(verbs, vec![Verb::Move, Verb::Upgrade]);
}

#[test]
fn test_information_commands_change_nothing() {
    let mut ctl = GameController::new(
        GameBuilder::new(5).seed(8).build().unwrap(),
        MemoryStore::new(),
    );
    ctl.start(&mut NullSink).unwrap();
    let before = ctl.game().snapshot();

    for command in [Command::Who, Command::Where, Command::Board, Command::Help] {
        let mut events = Vec::new();
        let step = ctl.submit(command, &mut events).unwrap();

        assert_eq!(step, Step::AwaitingCommand(PlayerId::new(1)));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Message(_))));
        assert_eq!(ctl.game().snapshot(), before);
    }
}

#[test]
fn test_who_describes_the_active_player() {
    let game = GameBuilder::new(5).seed(8).build().unwrap();
    let (_, _, events) = play(game, &["who"]);

    assert!(events.contains(&GameEvent::Message(
        "Player 1 ($0, 2cr, rank 1)".to_string()
    )));
}

#[test]
fn test_parse_errors_are_reported() {
    let game = GameBuilder::new(2).seed(8).build().unwrap();
    let (ctl, input, events) = play(game, &["", "upgrade 2 pesos", "end"]);

    let messages = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Message(_)))
        .count();
    assert_eq!(messages, 2);
    assert_eq!(ctl.game().history().len(), 1);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_tied_players_share_the_win() {
    let mut game = GameBuilder::new(4).seed(3).build().unwrap();
    game.players[PlayerId::new(2)].dollars = 10;
    game.players[PlayerId::new(4)].rank = 2;
    game.players[PlayerId::new(4)].credits = 5;

    let result = game.result();
    assert_eq!(
        result,
        GameResult::Tie(vec![PlayerId::new(2), PlayerId::new(4)])
    );
    assert!(result.is_winner(PlayerId::new(4)));
    assert!(!result.is_winner(PlayerId::new(1)));

    game.players[PlayerId::new(2)].dollars = 11;
    assert_eq!(game.result(), GameResult::Winner(PlayerId::new(2)));
}
