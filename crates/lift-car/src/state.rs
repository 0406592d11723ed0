//! The closed set of car states and their per-state behavior.
//!
//! Every operation is a single `match` on the state tag. Operations that
//! may change state consume `self` and return the next state; the owning
//! [`Car`](crate::Car) writes the result back into its state field.

use lift_core::{Direction, Floor, HallCall, Heading, PendingRequest, StopKind};

use crate::cabin::Cabin;
use crate::outcome::CarTick;

/// Behavior-selecting state of a car, carrying its [`Cabin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarState {
    /// Parked with no destinations and no pending requests.
    Idle(Cabin),
    /// Sweeping upward; every destination is at or above the car.
    MovingUp(Cabin),
    /// Sweeping downward; every destination is at or below the car.
    MovingDown(Cabin),
}

impl Default for CarState {
    fn default() -> Self {
        CarState::Idle(Cabin::default())
    }
}

impl CarState {
    fn moving(dir: Direction, cabin: Cabin) -> CarState {
        match dir {
            Direction::Up => CarState::MovingUp(cabin),
            Direction::Down => CarState::MovingDown(cabin),
        }
    }

    /// State label.
    pub fn heading(&self) -> Heading {
        match self {
            CarState::Idle(_) => Heading::Idle,
            CarState::MovingUp(_) => Heading::Up,
            CarState::MovingDown(_) => Heading::Down,
        }
    }

    /// Shared per-car data.
    pub fn cabin(&self) -> &Cabin {
        match self {
            CarState::Idle(c) | CarState::MovingUp(c) | CarState::MovingDown(c) => c,
        }
    }

    pub(crate) fn cabin_mut(&mut self) -> &mut Cabin {
        match self {
            CarState::Idle(c) | CarState::MovingUp(c) | CarState::MovingDown(c) => c,
        }
    }

    /// Whether a car in this state may take `call`.
    ///
    /// An idle car takes any call while it has room. A moving car takes
    /// only calls in its own direction whose origin it has not yet passed.
    pub fn can_accept(&self, call: &HallCall, capacity: u32) -> bool {
        match self {
            CarState::Idle(c) => c.occupancy < capacity,
            CarState::MovingUp(c) => {
                call.direction == Direction::Up && call.origin >= c.floor && c.occupancy < capacity
            }
            CarState::MovingDown(c) => {
                call.direction == Direction::Down
                    && call.origin <= c.floor
                    && c.occupancy < capacity
            }
        }
    }

    /// Record a stop at `floor`.
    ///
    /// An idle car starts moving toward the floor. If it is already there,
    /// pending requests for the floor are dropped and a drop-off alights on
    /// the spot, so the car stays idle with one passenger fewer.
    ///
    /// A moving car adds floors strictly ahead to its destinations. Its own
    /// floor is also added, to be served on the next tick, unless a pickup
    /// still lies ahead: the press then belongs to a passenger not yet on
    /// board, and waits for the return sweep. Floors behind are queued for
    /// the return sweep.
    pub fn add_stop(self, floor: Floor, kind: StopKind) -> CarState {
        match self {
            CarState::Idle(mut cabin) => match Direction::toward(cabin.floor, floor) {
                Some(dir) => {
                    cabin.insert_stop(floor, kind);
                    CarState::moving(dir, cabin)
                }
                None => {
                    cabin.purge_pending(floor);
                    if kind == StopKind::Dropoff {
                        cabin.alight();
                    }
                    CarState::Idle(cabin)
                }
            },
            CarState::MovingUp(cabin) => Self::enqueue(Direction::Up, cabin, floor, kind),
            CarState::MovingDown(cabin) => Self::enqueue(Direction::Down, cabin, floor, kind),
        }
    }

    fn enqueue(dir: Direction, mut cabin: Cabin, floor: Floor, kind: StopKind) -> CarState {
        let here = floor == cabin.floor && !cabin.has_pickup_ahead(dir);
        if here || dir.is_ahead(cabin.floor, floor) {
            cabin.insert_stop(floor, kind);
        } else {
            cabin.pending.push_back(PendingRequest {
                floor,
                direction: dir.opposite(),
                kind,
            });
        }
        CarState::moving(dir, cabin)
    }

    /// Advance one time unit.
    ///
    /// Serves the current floor, moves one floor toward the remaining
    /// destinations (never past `top` or below the ground floor), serves
    /// the arrival floor, then settles: keep going while a destination
    /// lies ahead, go idle when nothing is left, otherwise turn toward the
    /// next pending request.
    pub fn tick(self, top: Floor, report: &mut CarTick) -> CarState {
        let (dir, mut cabin) = match self {
            CarState::Idle(cabin) => return CarState::Idle(cabin),
            CarState::MovingUp(cabin) => (Direction::Up, cabin),
            CarState::MovingDown(cabin) => (Direction::Down, cabin),
        };

        cabin.serve_here(report);
        if cabin.has_stop_ahead(dir) {
            let from = cabin.floor;
            cabin.floor = match dir {
                Direction::Up => from.up(top),
                Direction::Down => from.down(),
            };
            report.moved = cabin.floor != from;
            cabin.serve_here(report);
        }
        Self::settle(dir, cabin, report)
    }

    /// Pick the next state once the current floor has been served.
    fn settle(dir: Direction, mut cabin: Cabin, report: &mut CarTick) -> CarState {
        loop {
            if cabin.has_stop_ahead(dir) {
                return CarState::moving(dir, cabin);
            }
            if !cabin.stops.is_empty() {
                // Remaining destinations are all behind the car.
                return CarState::moving(dir.opposite(), cabin);
            }
            let Some(next) = cabin.pending.pop_front() else {
                report.alighted += cabin.occupancy;
                cabin.occupancy = 0;
                return CarState::Idle(cabin);
            };
            match Direction::toward(cabin.floor, next.floor) {
                Some(towards) => {
                    cabin.insert_stop(next.floor, next.kind);
                    return CarState::moving(towards, cabin);
                }
                None => cabin.serve(next.kind, report),
            }
        }
    }
}
