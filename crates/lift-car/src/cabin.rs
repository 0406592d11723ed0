//! Per-car data carried by every [`CarState`](crate::CarState) variant.

use std::collections::VecDeque;

use indexmap::IndexMap;
use lift_core::{Direction, Floor, PendingRequest, StopKind};

use crate::outcome::CarTick;

/// Position, passengers, destinations and pending requests of one car.
///
/// The destination set is insertion-ordered and unique per floor; only
/// membership and position relative to the car matter. The pending queue
/// is FIFO in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cabin {
    pub(crate) floor: Floor,
    pub(crate) occupancy: u32,
    pub(crate) stops: IndexMap<Floor, StopKind>,
    pub(crate) pending: VecDeque<PendingRequest>,
}

impl Cabin {
    /// An empty cabin at `floor`.
    pub fn at(floor: Floor) -> Self {
        Self {
            floor,
            ..Self::default()
        }
    }

    /// Current floor.
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Passengers on board.
    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// Destination floors in insertion order.
    pub fn destinations(&self) -> impl Iterator<Item = Floor> + '_ {
        self.stops.keys().copied()
    }

    /// Why the car will stop at `floor`, if it will.
    pub fn stop_kind(&self, floor: Floor) -> Option<StopKind> {
        self.stops.get(&floor).copied()
    }

    /// Pending opposite-direction requests in arrival order.
    pub fn pending(&self) -> impl Iterator<Item = &PendingRequest> + '_ {
        self.pending.iter()
    }

    /// Whether there is nothing left to do.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty() && self.pending.is_empty()
    }

    pub(crate) fn has_stop_ahead(&self, dir: Direction) -> bool {
        self.stops.keys().any(|&f| dir.is_ahead(self.floor, f))
    }

    pub(crate) fn has_pickup_ahead(&self, dir: Direction) -> bool {
        self.stops
            .iter()
            .any(|(&f, &k)| k == StopKind::Pickup && dir.is_ahead(self.floor, f))
    }

    pub(crate) fn insert_stop(&mut self, floor: Floor, kind: StopKind) {
        self.stops
            .entry(floor)
            .and_modify(|k| *k = k.merge(kind))
            .or_insert(kind);
    }

    /// Drop pending requests for `floor`.
    pub(crate) fn purge_pending(&mut self, floor: Floor) {
        self.pending.retain(|r| r.floor != floor);
    }

    /// Serve the stop at the current floor, if there is one.
    pub(crate) fn serve_here(&mut self, report: &mut CarTick) {
        if let Some(kind) = self.stops.shift_remove(&self.floor) {
            self.serve(kind, report);
        }
    }

    /// Serve a stop of `kind` at the current floor.
    pub(crate) fn serve(&mut self, kind: StopKind, report: &mut CarTick) {
        report.served.push(self.floor);
        if kind == StopKind::Dropoff && self.alight() {
            report.alighted += 1;
        }
    }

    /// One passenger leaves. Returns `false` if the car was already empty.
    pub(crate) fn alight(&mut self) -> bool {
        if self.occupancy > 0 {
            self.occupancy -= 1;
            true
        } else {
            false
        }
    }
}
