//! The [`DispatchPolicy`] trait and the built-in policies.

use lift_car::Car;
use lift_core::{CarId, HallCall};

/// Chooses the car that takes a hall call.
///
/// # Contract
///
/// - `select()` must return only a car whose [`Car::can_accept`] is true
///   for `call`, or `None` when no car can take it.
/// - `select()` must be deterministic: the same cars and call give the
///   same answer.
///
/// # Object safety
///
/// This trait is object-safe; the building stores its policy as
/// `Box<dyn DispatchPolicy>`.
///
/// # Examples
///
/// A policy that prefers the highest-indexed accepting car:
///
/// ```
/// use lift_car::Car;
/// use lift_core::{CarId, Direction, Floor, HallCall};
/// use lift_dispatch::DispatchPolicy;
///
/// struct LastFit;
///
/// impl DispatchPolicy for LastFit {
///     fn name(&self) -> &str { "last_fit" }
///
///     fn select(&self, cars: &[Car], call: &HallCall) -> Option<CarId> {
///         cars.iter().rev().find(|c| c.can_accept(call)).map(Car::id)
///     }
/// }
///
/// let cars = vec![Car::new(CarId(0), 6, 2), Car::new(CarId(1), 6, 2)];
/// let call = HallCall::new(Floor(3), Direction::Up);
/// assert_eq!(LastFit.select(&cars, &call), Some(CarId(1)));
/// ```
pub trait DispatchPolicy: Send + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Pick the car that should take `call`, if any.
    fn select(&self, cars: &[Car], call: &HallCall) -> Option<CarId>;
}

/// First car in index order that can accept the call.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFit;

impl DispatchPolicy for FirstFit {
    fn name(&self) -> &str {
        "first_fit"
    }

    fn select(&self, cars: &[Car], call: &HallCall) -> Option<CarId> {
        cars.iter().find(|c| c.can_accept(call)).map(Car::id)
    }
}

/// Accepting car with the shortest floor distance to the call's origin.
///
/// Ties go to the lower index.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestCar;

impl DispatchPolicy for NearestCar {
    fn name(&self) -> &str {
        "nearest_car"
    }

    fn select(&self, cars: &[Car], call: &HallCall) -> Option<CarId> {
        cars.iter()
            .filter(|c| c.can_accept(call))
            .min_by_key(|c| (c.floor().distance(call.origin), c.id()))
            .map(Car::id)
    }
}
