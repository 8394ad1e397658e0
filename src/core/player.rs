//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The game always has exactly two seats: the human-controlled `Player` and
//! the scripted `Opponent`.
//!
//! ## SeatMap
//!
//! Per-seat storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human-controlled seat. Acts first.
    Player,
    /// The scripted stand-in.
    Opponent,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }

    /// Storage index (0 for the player, 1 for the opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "Player"),
            Seat::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use deckforge::core::{Seat, SeatMap};
///
/// let mut lore: SeatMap<u32> = SeatMap::with_value(0);
/// lore[Seat::Opponent] = 3;
///
/// assert_eq!(lore[Seat::Player], 0);
/// assert_eq!(lore[Seat::Opponent], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player), factory(Seat::Opponent)],
        }
    }

    /// Create a SeatMap from explicit values.
    pub fn from_values(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Build a new map by applying `f` to each entry.
    pub fn map<U>(&self, f: impl Fn(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
