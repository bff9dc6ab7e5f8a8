//! Durable key-value storage for saved games.
//!
//! [`KeyValueStore`] is the raw string store (in-memory or a JSON file on
//! disk). [`GameStorage`] layers the two saved-game entries on top of it.

mod file;
mod saved;
mod store;

pub use file::FileStore;
pub use saved::{BOARD_KEY, GameStorage, SavedGame, TURN_KEY};
pub use store::{KeyValueStore, MemoryStore};
