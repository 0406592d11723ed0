//! Strongly-typed identifiers for cars, floors and ticks.

use std::fmt;

/// Identifies a car within a building.
///
/// Cars are allocated at initialization and numbered sequentially.
/// `CarId(n)` is the n-th car in the building's car list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub u32);

impl CarId {
    /// The car's position in the building's car list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CarId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A floor number, counted from the ground floor `0`.
///
/// A building with `F` floors accepts `Floor(0)` through `Floor(F - 1)`.
/// Use [`Floor::checked`] to convert untrusted integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor.
    pub const GROUND: Floor = Floor(0);

    /// Convert a raw integer into a floor of a building with `floors` floors.
    ///
    /// Returns `None` for negative values and values `>= floors`.
    pub fn checked(value: i64, floors: u32) -> Option<Floor> {
        u32::try_from(value)
            .ok()
            .filter(|&v| v < floors)
            .map(Floor)
    }

    /// Number of floors between `self` and `other`.
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor directly above, saturating at `top`.
    pub fn up(self, top: Floor) -> Floor {
        if self < top {
            Floor(self.0 + 1)
        } else {
            self
        }
    }

    /// The floor directly below, saturating at the ground floor.
    pub fn down(self) -> Floor {
        Floor(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Floor {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the building advances one simulated time unit.
/// Reset to zero by re-initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> TickId {
        TickId(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
