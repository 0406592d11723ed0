//! Core types for the Lift elevator simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: car and floor
//! identifiers, travel directions, hall calls, per-car snapshots and the
//! error enums returned by configuration and dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod call;
pub mod direction;
pub mod error;
pub mod id;
pub mod snapshot;

pub use call::{HallCall, PendingRequest, StopKind};
pub use direction::{Direction, Heading};
pub use error::{ConfigError, DispatchError, SnapshotParseError};
pub use id::{CarId, Floor, TickId};
pub use snapshot::CarSnapshot;
