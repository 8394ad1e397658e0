//! Zone system for card locations.
//!
//! Each seat owns five ordered zones (deck, hand, inkwell, field, discard).
//! A card instance is in exactly one zone of one seat at any time.
//!
//! ## Key Types
//!
//! - `Zone`: Which of the five zones
//! - `ZonePosition`: Insertion point within a zone
//! - `ZoneManager`: One seat's zones, with lookup and movement

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
