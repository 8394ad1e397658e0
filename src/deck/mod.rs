//! Deck builder: random deck construction from a card pool, and shuffling.
//!
//! Both operations take their randomness as a `RandomSource`, so callers
//! choose between a seeded `GameRng` and a scripted sequence.

pub mod builder;

pub use builder::{create_deck, shuffle_deck};
