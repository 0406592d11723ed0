//! Test utilities and mock types for Lift development.
//!
//! Provides building constructors, tick helpers and mock
//! [`DispatchPolicy`](lift_dispatch::DispatchPolicy) implementations
//! (see [`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use lift_core::{CarId, Direction, Floor};
use lift_engine::{Building, BuildingConfig, TickReport};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A building with the default policy. Panics on an invalid config.
pub fn building(floors: u32, cars: u32, capacity: u32) -> Building {
    init_logger();
    Building::new(BuildingConfig::new(floors, cars, capacity))
        .unwrap_or_else(|e| panic!("invalid test building {floors}x{cars}x{capacity}: {e}"))
}

/// Run `n` ticks, returning the last report (or `None` for `n == 0`).
pub fn tick_n(building: &mut Building, n: usize) -> Option<TickReport> {
    let mut last = None;
    for _ in 0..n {
        last = Some(building.tick());
    }
    last
}

/// State strings of every car in index order.
pub fn states(building: &Building) -> Vec<String> {
    building
        .snapshots()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// State string of one car. Panics on an unknown car.
pub fn state_of(building: &Building, car: u32) -> String {
    building
        .state_string(CarId(car))
        .unwrap_or_else(|e| panic!("state of car {car}: {e}"))
}

/// Hall call from raw parts. Panics on an out-of-range floor, returns the
/// dispatch result otherwise.
pub fn call(building: &mut Building, origin: u32, direction: char) -> Option<CarId> {
    let direction = Direction::try_from(direction)
        .unwrap_or_else(|e| panic!("bad direction in test: {e}"));
    building.request_car(Floor(origin), direction).ok()
}

/// In-car press from raw parts. Panics on invalid input.
pub fn press(building: &mut Building, car: u32, floor: u32) {
    building
        .press_destination(CarId(car), Floor(floor))
        .unwrap_or_else(|e| panic!("press {car}->{floor}: {e}"));
}
