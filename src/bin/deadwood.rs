//! Deadwood CLI - play a game at the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deadwood::game::{read_player_count, Step};
use deadwood::{
    EventSink, FileStore, GameBuilder, GameController, GameEvent, GameResult, GameState,
    InputSource, Prompt, SnapshotStore,
};

/// Deadwood - a board game about bit-part actors in the old West
#[derive(Parser, Debug)]
#[command(name = "deadwood")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players, 2-8 (asked for if omitted)
    #[arg(short, long)]
    players: Option<usize>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for saved games
    #[arg(long, default_value = "saves")]
    save_dir: PathBuf,

    /// Resume a saved game instead of starting a new one
    #[arg(long)]
    load: Option<String>,
}

/// Lines from standard input, with the prompt written to standard output.
struct Terminal {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl InputSource for Terminal {
    fn read(&mut self, prompt: &Prompt) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;
        self.lines.next()?.ok()
    }
}

/// Prints events as plain text.
struct Console;

impl EventSink for Console {
    fn emit(&mut self, event: GameEvent) {
        if let Some(text) = render(&event) {
            println!("{}", text);
        }
    }
}

fn render(event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::Message(text) => text.clone(),
        GameEvent::DayStarted { day, num_days } => format!("\n=== Day {} of {} ===", day, num_days),
        GameEvent::DayEnded { day } => format!("Day {} is over. Everyone back to the Trailer.", day),
        GameEvent::TurnStarted { player, .. } => format!("\n{}'s turn.", player),
        GameEvent::ActionsCleared | GameEvent::CardDealt { .. } => return None,
        GameEvent::ActionsAvailable { verbs, .. } => {
            let names: Vec<_> = verbs.iter().map(|v| v.name()).collect();
            format!("You can: {}", names.join(", "))
        }
        GameEvent::PlayerMoved { player, location } => format!("{} moved to {}.", player, location),
        GameEvent::RoleTaken {
            player,
            role,
            location,
        } => format!("{} is working {} at {}.", player, role, location),
        GameEvent::Rehearsed { player, tokens } => {
            format!("{} rehearsed ({} tokens).", player, tokens)
        }
        GameEvent::DiceRolled {
            player,
            die,
            tokens,
            budget,
            success,
        } => format!(
            "{} rolled {} + {} against a budget of {}: {}",
            player,
            die,
            tokens,
            budget,
            if *success { "success!" } else { "fail." }
        ),
        GameEvent::ShotRemoved {
            location,
            take,
            remaining,
        } => format!("Take {} done at {}, {} to go.", take, location, remaining),
        GameEvent::SceneWrapped(report) => {
            let mut text = format!("That's a wrap at {}!", report.location);
            if !report.bonus_rolls.is_empty() {
                text.push_str(&format!(" Bonus dice: {:?}.", report.bonus_rolls));
            }
            for payout in &report.payouts {
                text.push_str(&format!("\n  {} earns ${}", payout.player, payout.dollars));
            }
            text
        }
        GameEvent::PlayerUpdated {
            player,
            rank,
            dollars,
            credits,
        } => format!("{}: ${}, {}cr, rank {}", player, dollars, credits, rank),
        GameEvent::GameSaved { name } => format!("Saved as {:?}.", name),
        GameEvent::GameLoaded { name } => format!("Loaded {:?}.", name),
        GameEvent::ScoresShown(standings) => {
            let mut text = String::from("\nFinal scores:");
            for (i, s) in standings.iter().enumerate() {
                text.push_str(&format!(
                    "\n  {}. {}: {} (rank {}, ${}, {}cr){}",
                    i + 1,
                    s.player,
                    s.score,
                    s.rank,
                    s.dollars,
                    s.credits,
                    if s.winner { "  winner" } else { "" }
                ));
            }
            text
        }
    };
    Some(text)
}

fn play(args: Args) -> Result<(), Box<dyn Error>> {
    let mut input = Terminal {
        lines: io::stdin().lines(),
    };
    let mut out = Console;
    let store = FileStore::new(args.save_dir);

    let game = match args.load {
        Some(name) => GameState::from_snapshot(store.load(&name)?)?,
        None => {
            let players = match args.players {
                Some(players) => players,
                None => match read_player_count(&mut input, &mut out) {
                    Some(players) => players,
                    None => return Ok(()),
                },
            };
            let seed = args.seed.unwrap_or_else(rand::random);
            GameBuilder::new(players).seed(seed).build()?
        }
    };

    let mut controller = GameController::new(game, store);
    if let Step::GameOver(result) = controller.run(&mut input, &mut out)? {
        match result {
            GameResult::Winner(player) => println!("{} wins!", player),
            GameResult::Tie(players) => {
                let names: Vec<_> = players.iter().map(ToString::to_string).collect();
                println!("Tie between {}!", names.join(" and "));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "deadwood=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match play(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
