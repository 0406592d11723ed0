//! Per-car state machine for the Lift elevator simulation.
//!
//! A [`Car`] owns its position, passengers, destinations and pending
//! opposite-direction requests. Its behavior is selected by a closed
//! [`CarState`] enum (Idle, MovingUp, MovingDown); each operation is a
//! single match on that tag, and a transition replaces the car's state
//! field in place.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cabin;
pub mod car;
pub mod outcome;
pub mod state;

pub use cabin::Cabin;
pub use car::Car;
pub use outcome::CarTick;
pub use state::CarState;
