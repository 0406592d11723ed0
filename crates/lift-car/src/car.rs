//! A single elevator car: identity, bounds and current state.

use std::mem;

use log::{debug, trace};

use lift_core::{CarId, CarSnapshot, Floor, HallCall, Heading, PendingRequest, StopKind};

use crate::outcome::CarTick;
use crate::state::CarState;

/// One elevator car.
///
/// Owned by the building. The state field is replaced wholesale on each
/// transition; nothing else holds a reference to it.
///
/// # Examples
///
/// ```
/// use lift_car::Car;
/// use lift_core::{CarId, Direction, Floor, HallCall};
///
/// let mut car = Car::new(CarId(0), 6, 2);
/// car.accept(HallCall::new(Floor(0), Direction::Up));
/// car.press(Floor(4));
/// car.tick();
/// assert_eq!(car.snapshot().to_string(), "1-U-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    top: Floor,
    capacity: u32,
    state: CarState,
}

impl Car {
    /// A new idle, empty car on the ground floor of a building with
    /// `floors` floors.
    pub fn new(id: CarId, floors: u32, capacity: u32) -> Self {
        Self {
            id,
            top: Floor(floors.saturating_sub(1)),
            capacity,
            state: CarState::default(),
        }
    }

    /// This car's identifier.
    pub fn id(&self) -> CarId {
        self.id
    }

    /// Current floor.
    pub fn floor(&self) -> Floor {
        self.state.cabin().floor()
    }

    /// Current state label.
    pub fn heading(&self) -> Heading {
        self.state.heading()
    }

    /// Passengers on board.
    pub fn occupancy(&self) -> u32 {
        self.state.cabin().occupancy()
    }

    /// Maximum passengers on board.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether the car is idle.
    pub fn is_idle(&self) -> bool {
        self.heading() == Heading::Idle
    }

    /// Current state, including per-car data.
    pub fn state(&self) -> &CarState {
        &self.state
    }

    /// Destination floors in insertion order.
    pub fn destinations(&self) -> impl Iterator<Item = Floor> + '_ {
        self.state.cabin().destinations()
    }

    /// Whether `floor` is a destination.
    pub fn has_destination(&self, floor: Floor) -> bool {
        self.stop_kind(floor).is_some()
    }

    /// Why the car will stop at `floor`, if it will.
    pub fn stop_kind(&self, floor: Floor) -> Option<StopKind> {
        self.state.cabin().stop_kind(floor)
    }

    /// Pending opposite-direction requests in arrival order.
    pub fn pending(&self) -> impl Iterator<Item = &PendingRequest> + '_ {
        self.state.cabin().pending()
    }

    /// Point-in-time view for state queries.
    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            floor: self.floor(),
            heading: self.heading(),
            occupancy: self.occupancy(),
        }
    }

    /// Whether this car may take `call` in its current state.
    pub fn can_accept(&self, call: &HallCall) -> bool {
        self.state.can_accept(call, self.capacity)
    }

    /// Apply a hall call this car has been assigned.
    ///
    /// A call at the car's own floor records no stop. An idle car drops any
    /// pending requests for that floor.
    pub fn accept(&mut self, call: HallCall) {
        if call.origin == self.floor() {
            if self.is_idle() {
                self.state.cabin_mut().purge_pending(call.origin);
            }
            debug!("car {} takes call at its own floor {}", self.id, call.origin);
            return;
        }
        self.transition(|s| s.add_stop(call.origin, StopKind::Pickup));
    }

    /// Accept `call` if the car can take it. Returns whether it did.
    pub fn offer(&mut self, call: HallCall) -> bool {
        if !self.can_accept(&call) {
            return false;
        }
        self.accept(call);
        true
    }

    /// In-car destination press.
    ///
    /// Boards a passenger when the floor is new and there is room, then
    /// records a drop-off stop. An idle car pressed for its own floor lets
    /// that passenger off at once and stays idle.
    pub fn press(&mut self, floor: Floor) {
        let cabin = self.state.cabin_mut();
        if cabin.stop_kind(floor).is_none() && cabin.occupancy < self.capacity {
            cabin.occupancy += 1;
        }
        self.transition(|s| s.add_stop(floor, StopKind::Dropoff));
    }

    /// Advance one time unit.
    pub fn tick(&mut self) -> CarTick {
        let mut report = CarTick::new(self.id, self.heading());
        let top = self.top;
        self.transition(|s| s.tick(top, &mut report));
        report.to = self.heading();
        trace!(
            "car {} tick: {} -> {} at floor {}, served {:?}",
            self.id,
            report.from,
            report.to,
            self.floor(),
            report.served.as_slice()
        );
        report
    }

    fn transition(&mut self, f: impl FnOnce(CarState) -> CarState) {
        let before = self.heading();
        self.state = f(mem::take(&mut self.state));
        let after = self.heading();
        if before != after {
            debug!(
                "car {} {} -> {} at floor {}",
                self.id,
                before,
                after,
                self.floor()
            );
        }
    }
}
