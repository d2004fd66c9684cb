//! A running game: its state, the day/turn cycle, events, persistence and
//! the controller that ties them to input and output.

pub mod builder;
pub mod controller;
pub mod events;
pub mod persistence;
pub mod state;
pub mod turn;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::GameBuilder;
pub use controller::{read_player_count, GameController, InputSource, Prompt, ScriptedInput, Step};
pub use events::{EventSink, GameEvent, NullSink};
pub use persistence::{
    is_valid_save_name, FileStore, MemoryStore, Snapshot, SnapshotStore, SNAPSHOT_VERSION,
};
pub use state::GameState;
pub use turn::Phase;
