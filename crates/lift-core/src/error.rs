//! Error types for the Lift simulation.
//!
//! Organized by subsystem: building configuration, request dispatch,
//! and state-string parsing. None of these are fatal; every variant is a
//! well-defined rejection reported synchronously to the caller.

use std::error::Error;
use std::fmt;

use crate::id::{CarId, Floor};

/// Errors detected while validating a building configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The building has no floors.
    ZeroFloors,
    /// The building has no cars.
    ZeroCars,
    /// Cars cannot carry anyone.
    ZeroCapacity,
    /// A dimension was given as a negative number.
    Negative {
        /// Which dimension (`"floors"`, `"cars"` or `"capacity"`).
        name: &'static str,
        /// The value supplied.
        value: i64,
    },
    /// A dimension exceeds what the sentinel-valued surface can index.
    TooLarge {
        /// Which dimension.
        name: &'static str,
        /// The value supplied.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFloors => write!(f, "building must have at least one floor"),
            Self::ZeroCars => write!(f, "building must have at least one car"),
            Self::ZeroCapacity => write!(f, "car capacity must be at least 1"),
            Self::Negative { name, value } => {
                write!(f, "{name} must not be negative, got {value}")
            }
            Self::TooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Rejections from hall-call dispatch, destination presses and state queries.
///
/// Capacity exhaustion is not an error in itself; it surfaces as
/// [`NoCarAvailable`](DispatchError::NoCarAvailable) when no car can take
/// a call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// Floor outside `[0, floors - 1]`.
    FloorOutOfRange {
        /// The floor as supplied by the caller.
        floor: i64,
        /// Number of floors in the building.
        floors: u32,
    },
    /// Car index outside `[0, cars - 1]`.
    CarOutOfRange {
        /// The car index as supplied by the caller.
        car: i64,
        /// Number of cars in the building.
        cars: u32,
    },
    /// Direction token other than `U` or `D`.
    UnknownDirection {
        /// The offending token.
        token: char,
    },
    /// No car can accept the call right now. The caller may retry
    /// after a later tick.
    NoCarAvailable,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloorOutOfRange { floor, floors } => {
                write!(f, "floor {floor} out of range [0, {floors})")
            }
            Self::CarOutOfRange { car, cars } => {
                write!(f, "car {car} out of range [0, {cars})")
            }
            Self::UnknownDirection { token } => {
                write!(f, "unknown direction token {token:?}, expected 'U' or 'D'")
            }
            Self::NoCarAvailable => write!(f, "no car can accept the call"),
        }
    }
}

impl Error for DispatchError {}

impl DispatchError {
    /// Shorthand for an out-of-range [`Floor`].
    pub fn floor(floor: Floor, floors: u32) -> Self {
        Self::FloorOutOfRange {
            floor: i64::from(floor.0),
            floors,
        }
    }

    /// Shorthand for an out-of-range [`CarId`].
    pub fn car(car: CarId, cars: u32) -> Self {
        Self::CarOutOfRange {
            car: i64::from(car.0),
            cars,
        }
    }
}

/// Errors from parsing a `"<floor>-<U|D|I>-<occupancy>"` state string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotParseError {
    /// Not exactly three `-`-separated parts.
    Malformed {
        /// The full input.
        input: String,
    },
    /// Floor or occupancy is not a non-negative integer.
    InvalidNumber {
        /// Which part failed (`"floor"` or `"occupancy"`).
        part: &'static str,
        /// The offending text.
        input: String,
    },
    /// Heading label is not one of `U`, `D`, `I`.
    InvalidHeading {
        /// The offending text.
        input: String,
    },
}

impl fmt::Display for SnapshotParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => {
                write!(f, "malformed state string {input:?}")
            }
            Self::InvalidNumber { part, input } => {
                write!(f, "invalid {part} {input:?}")
            }
            Self::InvalidHeading { input } => {
                write!(f, "invalid heading {input:?}, expected U, D or I")
            }
        }
    }
}

impl Error for SnapshotParseError {}
