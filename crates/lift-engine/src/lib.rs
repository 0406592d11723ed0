//! Building registry for the Lift elevator simulation.
//!
//! [`Building`] owns every car, routes hall calls through a
//! [`DispatchPolicy`](lift_dispatch::DispatchPolicy), forwards in-car
//! presses, answers state queries and broadcasts [`tick()`](Building::tick)
//! to all cars. It is configured by a validated [`BuildingConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod building;
pub mod config;
pub mod metrics;

pub use building::{Building, TickReport};
pub use config::{BuildingConfig, PolicyKind};
pub use metrics::BuildingMetrics;
