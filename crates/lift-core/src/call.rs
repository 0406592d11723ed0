//! Hall calls, stop kinds and pending opposite-direction requests.

use crate::direction::Direction;
use crate::id::Floor;

/// A request for a car to come to a floor, made outside any car.
///
/// Carries only the desired travel direction. A hall call is transient:
/// once accepted it is absorbed into a car's destinations or pending queue.
///
/// # Examples
///
/// ```
/// use lift_core::{Direction, Floor, HallCall};
///
/// let call = HallCall::new(Floor(3), Direction::Down);
/// assert_eq!(call.origin, Floor(3));
/// assert_eq!(call.direction, Direction::Down);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HallCall {
    /// Floor the call was made from.
    pub origin: Floor,
    /// Direction the caller wants to travel.
    pub direction: Direction,
}

impl HallCall {
    /// Create a hall call.
    pub fn new(origin: Floor, direction: Direction) -> Self {
        Self { origin, direction }
    }
}

/// Why a car stops at a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopKind {
    /// Collect a waiting hall caller. Nobody alights.
    Pickup,
    /// Let off a passenger who pressed this floor inside the car.
    Dropoff,
}

impl StopKind {
    /// Combine two reasons to stop at the same floor.
    ///
    /// A floor that is both a pickup and a drop-off is a drop-off.
    pub fn merge(self, other: StopKind) -> StopKind {
        match (self, other) {
            (StopKind::Pickup, StopKind::Pickup) => StopKind::Pickup,
            _ => StopKind::Dropoff,
        }
    }
}

/// A stop that could not join the current sweep.
///
/// Queued FIFO and served after the car reverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    /// Floor to stop at.
    pub floor: Floor,
    /// Opposite of the sweep that queued the request.
    ///
    /// Descriptive only: when the car folds the request in, it heads
    /// toward `floor` from wherever it is then.
    pub direction: Direction,
    /// Why the car stops there.
    pub kind: StopKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropoff_dominates_merge() {
        assert_eq!(StopKind::Pickup.merge(StopKind::Pickup), StopKind::Pickup);
        assert_eq!(StopKind::Pickup.merge(StopKind::Dropoff), StopKind::Dropoff);
        assert_eq!(StopKind::Dropoff.merge(StopKind::Pickup), StopKind::Dropoff);
        assert_eq!(StopKind::Dropoff.merge(StopKind::Dropoff), StopKind::Dropoff);
    }
}
