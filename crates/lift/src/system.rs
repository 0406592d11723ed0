//! Integer-and-character surface over a [`Building`].
//!
//! [`ElevatorSystem`] accepts raw `i32` indices and `char` direction tokens.
//! Rejected hall calls come back as [`NO_CAR`]; invalid presses are
//! ignored. Every rejection is logged at `debug`.

use log::debug;

use lift_core::{CarId, ConfigError, Direction, Floor};
use lift_engine::{Building, BuildingConfig, PolicyKind};

/// Returned by [`ElevatorSystem::request_lift`] when no car takes the call.
pub const NO_CAR: i32 = -1;

/// Elevator system driven by raw integers.
///
/// Holds no building until [`init()`](ElevatorSystem::init) succeeds; until
/// then every request returns [`NO_CAR`] and every query returns `None`.
///
/// # Examples
///
/// ```
/// use lift::{ElevatorSystem, NO_CAR};
///
/// let mut sys = ElevatorSystem::new();
/// sys.init(2, 1, 1)?;
/// assert_eq!(sys.request_lift(1, 'D'), 0);
/// sys.press_floor_button(0, 0);
/// sys.tick();
/// assert_eq!(sys.lift_state(0).as_deref(), Some("1-D-1"));
/// assert_eq!(sys.request_lift(1, 'X'), NO_CAR);
/// # Ok::<(), lift::types::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ElevatorSystem {
    policy: PolicyKind,
    building: Option<Building>,
}

fn dimension(name: &'static str, value: i32) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::Negative {
        name,
        value: i64::from(value),
    })
}

impl ElevatorSystem {
    /// An uninitialized system using first-fit dispatch.
    pub fn new() -> Self {
        Self::default()
    }

    /// An uninitialized system that will dispatch with `policy`.
    pub fn with_policy(policy: PolicyKind) -> Self {
        Self {
            policy,
            building: None,
        }
    }

    /// Build (or rebuild) the building.
    ///
    /// All cars start idle and empty on floor 0. On error the previous
    /// building, if any, is kept.
    pub fn init(&mut self, floors: i32, cars: i32, capacity: i32) -> Result<(), ConfigError> {
        let config = BuildingConfig {
            floors: dimension("floors", floors)?,
            cars: dimension("cars", cars)?,
            capacity: dimension("capacity", capacity)?,
            policy: self.policy,
        };
        match &mut self.building {
            Some(building) => building.initialize(config),
            None => {
                self.building = Some(Building::new(config)?);
                Ok(())
            }
        }
    }

    /// Underlying building, once initialized.
    pub fn building(&self) -> Option<&Building> {
        self.building.as_ref()
    }

    /// Hall call at `origin` heading `direction` (`'U'` or `'D'`).
    ///
    /// Returns the assigned car index, or [`NO_CAR`].
    pub fn request_lift(&mut self, origin: i32, direction: char) -> i32 {
        let Some(building) = self.building.as_mut() else {
            debug!("request_lift({origin}, {direction:?}) before init");
            return NO_CAR;
        };
        let direction = match Direction::try_from(direction) {
            Ok(d) => d,
            Err(e) => {
                debug!("request_lift rejected: {e}");
                return NO_CAR;
            }
        };
        let Some(origin) = Floor::checked(i64::from(origin), building.floors()) else {
            debug!(
                "request_lift rejected: floor {origin} out of range [0, {})",
                building.floors()
            );
            return NO_CAR;
        };
        match building.request_car(origin, direction) {
            Ok(car) => i32::try_from(car.0).unwrap_or(NO_CAR),
            Err(e) => {
                debug!("request_lift rejected: {e}");
                NO_CAR
            }
        }
    }

    /// In-car press on car `car` for floor `floor`. Invalid input is ignored.
    pub fn press_floor_button(&mut self, car: i32, floor: i32) {
        let Some(building) = self.building.as_mut() else {
            debug!("press_floor_button({car}, {floor}) before init");
            return;
        };
        let (Ok(car), Ok(floor)) = (u32::try_from(car), u32::try_from(floor)) else {
            debug!("press_floor_button ignored: negative car {car} or floor {floor}");
            return;
        };
        if let Err(e) = building.press_destination(CarId(car), Floor(floor)) {
            debug!("press_floor_button ignored: {e}");
        }
    }

    /// State string `"<floor>-<U|D|I>-<occupancy>"`, or `None` for an
    /// unknown car.
    pub fn lift_state(&self, car: i32) -> Option<String> {
        let building = self.building.as_ref()?;
        let car = u32::try_from(car).ok()?;
        building.state_string(CarId(car)).ok()
    }

    /// Advance every car one time unit.
    pub fn tick(&mut self) {
        if let Some(building) = self.building.as_mut() {
            building.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_system_rejects_everything() {
        let mut sys = ElevatorSystem::new();
        assert_eq!(sys.request_lift(0, 'U'), NO_CAR);
        sys.press_floor_button(0, 1);
        sys.tick();
        assert_eq!(sys.lift_state(0), None);
        assert!(sys.building().is_none());
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let mut sys = ElevatorSystem::new();
        match sys.init(-3, 1, 1) {
            Err(ConfigError::Negative {
                name: "floors",
                value: -3,
            }) => {}
            other => panic!("expected Negative(floors), got {other:?}"),
        }
        match sys.init(4, 1, 0) {
            Err(ConfigError::ZeroCapacity) => {}
            other => panic!("expected ZeroCapacity, got {other:?}"),
        }
        assert!(sys.building().is_none());
    }

    #[test]
    fn failed_reinit_keeps_previous_building() {
        let mut sys = ElevatorSystem::new();
        sys.init(6, 1, 2).unwrap();
        sys.press_floor_button(0, 3);
        sys.tick();
        assert!(sys.init(6, -1, 2).is_err());
        assert_eq!(sys.lift_state(0).as_deref(), Some("1-U-1"));
    }

    #[test]
    fn with_policy_is_applied_on_init() {
        let mut sys = ElevatorSystem::with_policy(PolicyKind::NearestCar);
        sys.init(5, 2, 2).unwrap();
        assert_eq!(
            sys.building().map(Building::policy_name),
            Some("nearest_car")
        );
    }
}
