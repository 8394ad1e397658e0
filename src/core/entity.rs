//! Card instance identification.
//!
//! Every card that exists in a game has a unique `InstanceId`, minted by an
//! `IdAllocator` when the instance is created (deck construction). The id
//! follows the card through every zone it visits and is never reused.
//!
//! ## Usage
//!
//! ```
//! use deckforge::core::{IdAllocator, InstanceId};
//!
//! let mut ids = IdAllocator::new();
//!
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, InstanceId(0));
//! assert_ne!(first, second);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// Many instances may share one `CardDefinition`; the instance id is what
/// tells them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// Monotonic allocator for instance ids.
///
/// Lives inside `GameState` so a snapshot restored by undo also restores the
/// allocator position. Ids handed out after an undo may therefore repeat ids
/// that only existed in the discarded future; within any single timeline an
/// id is never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocate a new instance id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far (the next raw id).
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.alloc(), InstanceId(0));
        assert_eq!(ids.alloc(), InstanceId(1));
        assert_eq!(ids.alloc(), InstanceId(2));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_starting_at() {
        let mut ids = IdAllocator::starting_at(100);
        assert_eq!(ids.alloc(), InstanceId(100));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(42)), "card-42");
    }

    #[test]
    fn test_clone_shares_position() {
        let mut ids = IdAllocator::new();
        ids.alloc();

        let mut snapshot = ids.clone();
        assert_eq!(snapshot.alloc(), ids.alloc());
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
