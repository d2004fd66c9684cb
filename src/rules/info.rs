//! Display-only commands. None of these change the game.

use super::action::{ActionContext, ActionOutcome, PlayerAction, Proof};
use super::command::Verb;
use super::rejection::Rejection;
use crate::core::{GameError, PlayerId};
use crate::game::GameState;

/// One line describing a player: money, rank and role.
#[must_use]
pub fn describe_player(game: &GameState, player: PlayerId) -> String {
    let p = &game.players[player];
    let mut text = format!(
        "{} (${}, {}cr, rank {})",
        player, p.dollars, p.credits, p.rank
    );
    if let Some(role) = game.current_role(player) {
        text.push_str(&format!(" working {}, \"{}\"", role.name, role.line));
    }
    if p.rehearsal_tokens > 0 {
        text.push_str(&format!(" with {} rehearsal tokens", p.rehearsal_tokens));
    }
    text
}

/// One line describing a location and what is shooting there.
#[must_use]
pub fn describe_location(game: &GameState, name: &str) -> String {
    let Some(location) = game.locations.get(name) else {
        return format!("{} (unknown location)", name);
    };
    if location.is_reserved() {
        return location.name.clone();
    }
    if location.is_wrapped() {
        return format!("{} wrapped", location.name);
    }

    let card = game
        .board
        .scene_card(name)
        .and_then(|id| game.deck.drawn_card(id));
    match card {
        Some(card) => format!(
            "{} shooting {} (budget ${}, {} shots left)",
            location.name,
            card.title,
            card.budget,
            location.shots()
        ),
        None => location.name.clone(),
    }
}

macro_rules! display_only {
    ($name:ident, $verb:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl PlayerAction for $name {
            fn verb(&self) -> Verb {
                $verb
            }

            fn validate(&self, _game: &GameState, _player: PlayerId) -> Result<(), Rejection> {
                Ok(())
            }

            fn execute(
                &self,
                game: &mut GameState,
                player: PlayerId,
                ctx: &mut ActionContext<'_>,
                _proof: Proof,
            ) -> Result<ActionOutcome, GameError> {
                for line in self.lines(game, player) {
                    ctx.out.message(line);
                }
                Ok(ActionOutcome::Continue)
            }
        }
    };
}

display_only!(Who, Verb::Who, "The active player's money, rank and role.");
display_only!(Where, Verb::Where, "The active player's location.");
display_only!(ShowBoard, Verb::Board, "Every player and every location.");
display_only!(Help, Verb::Help, "The command list.");

impl Who {
    fn lines(&self, game: &GameState, player: PlayerId) -> Vec<String> {
        vec![describe_player(game, player)]
    }
}

impl Where {
    fn lines(&self, game: &GameState, player: PlayerId) -> Vec<String> {
        let here = game.board.player_location(player).unwrap_or_default();
        vec![describe_location(game, here)]
    }
}

impl ShowBoard {
    fn lines(&self, game: &GameState, _player: PlayerId) -> Vec<String> {
        let mut lines = vec![format!(
            "Day {} of {}, {} scenes left",
            game.day(),
            game.num_days(),
            game.board.scenes_remaining()
        )];
        for id in game.players.player_ids() {
            let here = game.board.player_location(id).unwrap_or_default();
            lines.push(format!("{} in {}", describe_player(game, id), here));
        }
        for location in game.locations.iter() {
            lines.push(describe_location(game, &location.name));
        }
        lines
    }
}

impl Help {
    fn lines(&self, _game: &GameState, _player: PlayerId) -> Vec<String> {
        Verb::ALL.iter().map(|verb| verb.usage().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{run, started_game, take_role};
    use crate::game::GameEvent;
    use crate::rules::Command;

    #[test]
    fn test_who_describes_role() {
        let mut game = started_game(3);
        let p1 = PlayerId::new(1);
        take_role(&mut game, p1, "Saloon", "Reluctant Farmer");

        let (outcome, events) = run(&mut game, Command::Who);

        assert_eq!(outcome, ActionOutcome::Continue);
        assert_eq!(
            events,
            vec![GameEvent::Message(
                "Player 1 ($0, 0cr, rank 1) working Reluctant Farmer, \"I ain't so sure about that!\""
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_where_describes_scene() {
        let mut game = started_game(3);
        let (_, events) = run(&mut game, Command::Where);
        assert_eq!(events, vec![GameEvent::Message("Trailer".to_string())]);

        let text = describe_location(&game, "Saloon");
        assert!(text.starts_with("Saloon shooting "), "{}", text);
        assert!(text.ends_with("2 shots left)"), "{}", text);
    }

    #[test]
    fn test_board_and_help_list_everything() {
        let mut game = started_game(3);

        let (_, events) = run(&mut game, Command::Board);
        // Header, three players, twelve locations
        assert_eq!(events.len(), 1 + 3 + 12);

        let (_, events) = run(&mut game, Command::Help);
        assert_eq!(events.len(), Verb::ALL.len());
    }
}
