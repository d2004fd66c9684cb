//! Saving and loading whole games.
//!
//! A [`Snapshot`] is every piece of mutable game state, encoded with
//! bincode. Restoring checks the decoded snapshot in full before a
//! [`GameState`] is built from it, so a bad save can never leave a
//! half-loaded game behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::GameState;
use super::turn::Phase;
use crate::board::{Board, Locations};
use crate::cards::Deck;
use crate::core::{
    GameConfig, GameRng, GameRngState, PersistError, Player, PlayerMap, MAX_PLAYERS, MAX_RANK,
    MIN_PLAYERS, MIN_RANK,
};
use crate::definitions::UpgradeTable;
use crate::rules::ActionRecord;

/// Version number for the snapshot format (increment when it changes).
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub config: GameConfig,
    pub players: PlayerMap<Player>,
    pub board: Board,
    pub deck: Deck,
    pub locations: Locations,
    pub upgrades: UpgradeTable,
    pub rng: GameRngState,
    pub phase: Phase,
    pub history: Vector<ActionRecord>,
}

impl Snapshot {
    pub fn encode(&self) -> Result<Vec<u8>, PersistError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes written by [`Snapshot::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Snapshot, PersistError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    /// Check that the snapshot describes a game that could have been
    /// reached by play.
    pub fn check(&self) -> Result<(), PersistError> {
        let corrupt = |msg: String| Err(PersistError::Corrupt(msg));

        let count = self.config.player_count;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) || self.players.player_count() != count {
            return corrupt(format!(
                "{} players recorded for a {}-player game",
                self.players.player_count(),
                count
            ));
        }
        for (id, player) in self.players.iter() {
            if player.id != id {
                return corrupt(format!("{} stored in seat {}", player.id, id.0));
            }
            if !(MIN_RANK..=MAX_RANK).contains(&player.rank) {
                return corrupt(format!("{} has rank {}", id, player.rank));
            }
            if self.board.player_location(id).is_none() {
                return corrupt(format!("{} has no location", id));
            }
        }
        if let Some(stray) = self.board.players().find(|&id| !self.players.contains(id)) {
            return corrupt(format!("board places seat {} in a {}-player game", stray.0, count));
        }

        if let Err(card) = self.deck.check_partition() {
            return corrupt(format!("{} is in more than one pile", card));
        }
        self.board
            .check_consistency(&self.deck, &self.locations)
            .or_else(corrupt)?;

        let seat_ok = |p: crate::core::PlayerId| p.0 >= 1 && p.index() < count;
        let phase_ok = match self.phase {
            Phase::DayInProgress { day, next } | Phase::DayComplete { day, next } => {
                day >= 1 && day <= self.config.num_days && seat_ok(next)
            }
            Phase::TurnInProgress { day, player } => {
                day >= 1 && day <= self.config.num_days && seat_ok(player)
            }
            Phase::GameOver => true,
        };
        if !phase_ok {
            return corrupt(format!("impossible phase {:?}", self.phase));
        }
        Ok(())
    }
}

impl GameState {
    /// Copy the whole game into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            config: self.config.clone(),
            players: self.players.clone(),
            board: self.board.clone(),
            deck: self.deck.clone(),
            locations: self.locations.clone(),
            upgrades: self.upgrades.clone(),
            rng: self.rng.state(),
            phase: self.phase,
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot, checking it first.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<GameState, PersistError> {
        snapshot.check()?;
        Ok(GameState {
            config: snapshot.config,
            players: snapshot.players,
            board: snapshot.board,
            deck: snapshot.deck,
            locations: snapshot.locations,
            upgrades: snapshot.upgrades,
            rng: GameRng::from_state(&snapshot.rng),
            phase: snapshot.phase,
            history: snapshot.history,
        })
    }
}

/// Save names: 1 to 64 letters, digits, spaces, `-` or `_`.
#[must_use]
pub fn is_valid_save_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
}

/// Somewhere to keep named snapshots.
pub trait SnapshotStore {
    fn save(&mut self, name: &str, snapshot: &Snapshot) -> Result<(), PersistError>;

    fn load(&self, name: &str) -> Result<Snapshot, PersistError>;
}

/// Snapshots held in memory, encoded exactly as on disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saves: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under `name`, bypassing encoding.
    pub fn insert_raw(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.saves.insert(name.into(), bytes);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.saves.contains_key(name)
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, name: &str, snapshot: &Snapshot) -> Result<(), PersistError> {
        let bytes = snapshot.encode()?;
        self.saves.insert(name.to_string(), bytes);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Snapshot, PersistError> {
        let bytes = self
            .saves
            .get(name)
            .ok_or_else(|| PersistError::NotFound(name.to_string()))?;
        Snapshot::decode(bytes)
    }
}

/// Snapshots kept as `<dir>/<name>.sav`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> Result<PathBuf, PersistError> {
        if !is_valid_save_name(name) {
            return Err(PersistError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{}.sav", name)))
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, name: &str, snapshot: &Snapshot) -> Result<(), PersistError> {
        let path = self.path(name)?;
        let bytes = snapshot.encode()?;

        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("sav.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "snapshot written");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Snapshot, PersistError> {
        let path = self.path(name)?;
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistError::NotFound(name.to_string()),
            _ => PersistError::Io(e),
        })?;
        Snapshot::decode(&bytes)
    }
}
