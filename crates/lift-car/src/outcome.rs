//! Per-car outcome of a single tick.

use lift_core::{CarId, Floor, Heading};
use smallvec::SmallVec;

/// What happened to one car during one tick.
///
/// Produced by [`Car::tick()`](crate::Car::tick) and aggregated by the
/// building into its tick report and cumulative metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarTick {
    /// The car this outcome belongs to.
    pub car: CarId,
    /// State label before the tick.
    pub from: Heading,
    /// State label after the tick.
    pub to: Heading,
    /// Whether the car changed floor.
    pub moved: bool,
    /// Floors whose stops were served, in service order.
    pub served: SmallVec<[Floor; 2]>,
    /// Passengers who left the car (drop-offs, plus everyone still on
    /// board when the car went idle).
    pub alighted: u32,
}

impl CarTick {
    pub(crate) fn new(car: CarId, from: Heading) -> Self {
        Self {
            car,
            from,
            to: from,
            moved: false,
            served: SmallVec::new(),
            alighted: 0,
        }
    }

    /// Whether the car flipped between Up and Down this tick.
    pub fn reversed(&self) -> bool {
        matches!(
            (self.from, self.to),
            (Heading::Up, Heading::Down) | (Heading::Down, Heading::Up)
        )
    }

    /// Whether the car became idle this tick.
    pub fn went_idle(&self) -> bool {
        self.from != Heading::Idle && self.to == Heading::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_requires_two_directions() {
        let mut t = CarTick::new(CarId(0), Heading::Up);
        t.to = Heading::Down;
        assert!(t.reversed());
        t.to = Heading::Idle;
        assert!(!t.reversed());
        assert!(t.went_idle());
    }

    #[test]
    fn idle_to_idle_is_not_a_transition() {
        let t = CarTick::new(CarId(1), Heading::Idle);
        assert!(!t.went_idle());
        assert!(!t.reversed());
        assert!(!t.moved);
        assert!(t.served.is_empty());
    }
}
