//! Lift: a discrete-time elevator dispatch and motion simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Lift sub-crates, plus [`ElevatorSystem`], a thin surface that speaks
//! raw integers and characters and reports "no car" as [`NO_CAR`].
//!
//! # Quick start
//!
//! ```rust
//! use lift::prelude::*;
//!
//! let mut building = Building::new(BuildingConfig::new(6, 1, 2)).unwrap();
//! let car = building.request_car(Floor(0), Direction::Up).unwrap();
//! building.press_destination(car, Floor(4)).unwrap();
//! for _ in 0..4 {
//!     building.tick();
//! }
//! assert_eq!(building.state_string(car).unwrap(), "4-I-0");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lift-core` | IDs, directions, hall calls, snapshots, errors |
//! | [`car`] | `lift-car` | Per-car state machine |
//! | [`dispatch`] | `lift-dispatch` | Dispatch policy trait and built-in policies |
//! | [`engine`] | `lift-engine` | Building registry, config, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`lift-core`).
pub use lift_core as types;

/// Per-car state machine (`lift-car`).
///
/// [`car::Car`] wraps a [`car::CarState`]; each tick yields a
/// [`car::CarTick`].
pub use lift_car as car;

/// Hall-call dispatch (`lift-dispatch`).
///
/// Implement [`dispatch::DispatchPolicy`] to plug in a custom assignment
/// rule via [`engine::Building::with_policy`].
pub use lift_dispatch as dispatch;

/// Building registry (`lift-engine`).
pub use lift_engine as engine;

pub mod system;

pub use system::{ElevatorSystem, NO_CAR};

/// Common imports for typical usage.
///
/// ```rust
/// use lift::prelude::*;
/// ```
pub mod prelude {
    pub use lift_car::{Car, CarState, CarTick};
    pub use lift_core::{
        CarId, CarSnapshot, ConfigError, Direction, DispatchError, Floor, HallCall, Heading,
        TickId,
    };
    pub use lift_dispatch::{DispatchPolicy, FirstFit, NearestCar};
    pub use lift_engine::{Building, BuildingConfig, BuildingMetrics, PolicyKind, TickReport};

    pub use crate::system::{ElevatorSystem, NO_CAR};
}
