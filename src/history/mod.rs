//! Undo history and the game store that drives it.

pub mod manager;
pub mod store;

pub use manager::HistoryManager;
pub use store::GameStore;
