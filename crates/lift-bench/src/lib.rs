//! Benchmark profiles and utilities for the Lift elevator simulation.
//!
//! - [`reference_profile`]: 20 floors, 4 cars, capacity 8
//! - [`stress_profile`]: 200 floors, 32 cars, capacity 12
//! - [`workload`]: deterministic stream of hall calls, presses and ticks
//! - [`run_workload`]: drive a building through a workload

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lift_core::{CarId, Direction, Floor};
use lift_engine::{Building, BuildingConfig};

/// Reference benchmark building: 20 floors, 4 cars, capacity 8.
pub fn reference_profile() -> BuildingConfig {
    BuildingConfig::new(20, 4, 8)
}

/// Stress benchmark building: 200 floors, 32 cars, capacity 12.
pub fn stress_profile() -> BuildingConfig {
    BuildingConfig::new(200, 32, 12)
}

/// One input to a building.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Hall call at a floor.
    Call(Floor, Direction),
    /// In-car press.
    Press(CarId, Floor),
    /// Advance one time unit.
    Tick,
}

/// Generate `len` deterministic events for `config`.
///
/// Roughly half the events are ticks; the rest are split between hall
/// calls and presses. Every floor and car index is in range.
pub fn workload(config: &BuildingConfig, len: usize, seed: u64) -> Vec<Event> {
    let floors = u64::from(config.floors);
    let cars = u64::from(config.cars);
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    (0..len)
        .map(|_| match next() % 4 {
            0 => {
                let origin = (next() % floors) as u32;
                let dir = if next() % 2 == 0 {
                    Direction::Up
                } else {
                    Direction::Down
                };
                Event::Call(Floor(origin), dir)
            }
            1 => Event::Press(CarId((next() % cars) as u32), Floor((next() % floors) as u32)),
            _ => Event::Tick,
        })
        .collect()
}

/// Apply every event in order. Returns the number of hall calls assigned.
pub fn run_workload(building: &mut Building, events: &[Event]) -> usize {
    let mut assigned = 0;
    for event in events {
        match *event {
            Event::Call(origin, dir) => {
                if building.request_car(origin, dir).is_ok() {
                    assigned += 1;
                }
            }
            Event::Press(car, floor) => {
                // In range by construction.
                let _ = building.press_destination(car, floor);
            }
            Event::Tick => {
                building.tick();
            }
        }
    }
    assigned
}
