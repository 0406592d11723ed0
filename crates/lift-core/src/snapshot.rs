//! Per-car state snapshot and its `floor-heading-occupancy` string form.

use std::fmt;
use std::str::FromStr;

use crate::direction::Heading;
use crate::error::SnapshotParseError;
use crate::id::Floor;

/// Point-in-time view of one car.
///
/// Displays as `"<floor>-<U|D|I>-<occupancy>"`, the state-string format
/// reported by the building.
///
/// # Examples
///
/// ```
/// use lift_core::{CarSnapshot, Floor, Heading};
///
/// let snap = CarSnapshot { floor: Floor(4), heading: Heading::Up, occupancy: 10 };
/// assert_eq!(snap.to_string(), "4-U-10");
/// assert_eq!("4-U-10".parse::<CarSnapshot>(), Ok(snap));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarSnapshot {
    /// Current floor.
    pub floor: Floor,
    /// Current state label.
    pub heading: Heading,
    /// Passengers on board.
    pub occupancy: u32,
}

impl CarSnapshot {
    /// Snapshot of a freshly initialized car: idle on the ground floor, empty.
    pub const INITIAL: CarSnapshot = CarSnapshot {
        floor: Floor::GROUND,
        heading: Heading::Idle,
        occupancy: 0,
    };
}

impl fmt::Display for CarSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.floor, self.heading, self.occupancy)
    }
}

impl FromStr for CarSnapshot {
    type Err = SnapshotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(floor), Some(heading), Some(occupancy), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SnapshotParseError::Malformed {
                input: s.to_string(),
            });
        };
        let floor = floor
            .parse::<u32>()
            .map_err(|_| SnapshotParseError::InvalidNumber {
                part: "floor",
                input: floor.to_string(),
            })?;
        let mut chars = heading.chars();
        let heading = match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Heading::from_char(c).ok_or_else(|| SnapshotParseError::InvalidHeading {
                    input: heading.to_string(),
                })?
            }
            _ => {
                return Err(SnapshotParseError::InvalidHeading {
                    input: heading.to_string(),
                })
            }
        };
        let occupancy = occupancy
            .parse::<u32>()
            .map_err(|_| SnapshotParseError::InvalidNumber {
                part: "occupancy",
                input: occupancy.to_string(),
            })?;
        Ok(CarSnapshot {
            floor: Floor(floor),
            heading,
            occupancy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_formats_as_ground_idle_empty() {
        assert_eq!(CarSnapshot::INITIAL.to_string(), "0-I-0");
    }

    #[test]
    fn parse_rejects_missing_parts() {
        assert!(matches!(
            "4-U".parse::<CarSnapshot>(),
            Err(SnapshotParseError::Malformed { .. })
        ));
        assert!(matches!(
            "4-U-1-2".parse::<CarSnapshot>(),
            Err(SnapshotParseError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_rejects_bad_heading() {
        assert!(matches!(
            "4-X-1".parse::<CarSnapshot>(),
            Err(SnapshotParseError::InvalidHeading { .. })
        ));
        assert!(matches!(
            "4-UD-1".parse::<CarSnapshot>(),
            Err(SnapshotParseError::InvalidHeading { .. })
        ));
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        assert_eq!(
            "a-U-1".parse::<CarSnapshot>(),
            Err(SnapshotParseError::InvalidNumber {
                part: "floor",
                input: "a".to_string(),
            })
        );
        assert!(matches!(
            "1-U-x".parse::<CarSnapshot>(),
            Err(SnapshotParseError::InvalidNumber {
                part: "occupancy",
                ..
            })
        ));
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        prop_oneof![Just(Heading::Idle), Just(Heading::Up), Just(Heading::Down)]
    }

    proptest! {
        #[test]
        fn display_matches_state_pattern(
            floor in 0u32..1000,
            heading in arb_heading(),
            occupancy in 0u32..100,
        ) {
            let s = CarSnapshot { floor: Floor(floor), heading, occupancy }.to_string();
            let parts: Vec<&str> = s.split('-').collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert!(parts[0].chars().all(|c| c.is_ascii_digit()));
            prop_assert!(matches!(parts[1], "U" | "D" | "I"));
            prop_assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
