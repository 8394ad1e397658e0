//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Printed identity (set + collector number)
//! - `CardType` / `Rarity`: Classification attributes
//! - `CardDefinition`: Static card data, shared behind `Arc`
//! - `CardInstance`: Runtime card state (exerted, dried, face-down, damage)
//! - `CardRegistry`: The read-only card pool

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod starter;

pub use attributes::{CardType, Rarity};
pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::{CardRegistry, PoolError};
