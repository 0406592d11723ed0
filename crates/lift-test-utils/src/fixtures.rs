//! Reusable dispatch policy fixtures.
//!
//! - [`AlwaysReject`]: never assigns a call.
//! - [`FixedCar`]: always names one car, whether or not it can accept.
//! - [`CountingPolicy`]: first-fit selection that counts invocations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lift_car::Car;
use lift_core::{CarId, HallCall};
use lift_dispatch::{DispatchPolicy, FirstFit};

/// Rejects every hall call.
pub struct AlwaysReject;

impl DispatchPolicy for AlwaysReject {
    fn name(&self) -> &str {
        "always_reject"
    }

    fn select(&self, _cars: &[Car], _call: &HallCall) -> Option<CarId> {
        None
    }
}

/// Always picks the same car, ignoring `can_accept`.
///
/// Used to check that the building refuses a policy's choice when the
/// chosen car cannot take the call.
pub struct FixedCar(pub CarId);

impl DispatchPolicy for FixedCar {
    fn name(&self) -> &str {
        "fixed_car"
    }

    fn select(&self, _cars: &[Car], _call: &HallCall) -> Option<CarId> {
        Some(self.0)
    }
}

/// First-fit selection that counts how often it is asked.
///
/// Clone the counter handle with [`calls()`](CountingPolicy::calls) before
/// boxing the policy into a building.
pub struct CountingPolicy {
    calls: Arc<AtomicUsize>,
}

impl CountingPolicy {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the invocation counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for CountingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchPolicy for CountingPolicy {
    fn name(&self) -> &str {
        "counting"
    }

    fn select(&self, cars: &[Car], call: &HallCall) -> Option<CarId> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        FirstFit.select(cars, call)
    }
}
