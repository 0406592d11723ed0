//! The building: car registry, request routing and tick broadcast.
//!
//! # Ownership model
//!
//! [`Building`] owns its cars exclusively. All mutating methods take
//! `&mut self`, so request scanning and ticking can never interleave. It is
//! [`Send`] (can be moved between threads) and holds no background state.

use log::{debug, info, trace};

use lift_car::{Car, CarTick};
use lift_core::{
    CarId, CarSnapshot, ConfigError, Direction, DispatchError, Floor, HallCall, TickId,
};
use lift_dispatch::DispatchPolicy;

use crate::config::BuildingConfig;
use crate::metrics::BuildingMetrics;

// Compile-time assertion: Building is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Building>();
    }
};

// ── TickReport ──────────────────────────────────────────────────

/// Result of one [`Building::tick()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number just completed; the first tick after initialization is 1.
    pub tick: TickId,
    /// Per-car outcomes in car index order.
    pub cars: Vec<CarTick>,
}

impl TickReport {
    /// Outcome for one car.
    pub fn car(&self, id: CarId) -> Option<&CarTick> {
        self.cars.get(id.index())
    }

    /// Number of cars that changed floor.
    pub fn moved(&self) -> usize {
        self.cars.iter().filter(|c| c.moved).count()
    }
}

// ── Building ────────────────────────────────────────────────────

/// The building-wide registry of cars.
///
/// Created from a [`BuildingConfig`] via [`new()`](Building::new).
///
/// # Examples
///
/// ```
/// use lift_core::{CarId, Direction, Floor};
/// use lift_engine::{Building, BuildingConfig};
///
/// let mut building = Building::new(BuildingConfig::new(6, 1, 2))?;
/// let car = building.request_car(Floor(0), Direction::Up)?;
/// building.press_destination(car, Floor(4))?;
/// building.tick();
/// assert_eq!(building.state_string(CarId(0))?, "1-U-1");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Building {
    config: BuildingConfig,
    cars: Vec<Car>,
    policy: Box<dyn DispatchPolicy>,
    tick: TickId,
    metrics: BuildingMetrics,
}

impl Building {
    /// Create a building with every car idle and empty on the ground floor.
    pub fn new(config: BuildingConfig) -> Result<Self, ConfigError> {
        let policy = config.policy.build();
        Self::with_policy(config, policy)
    }

    /// Create a building that dispatches with a caller-supplied policy.
    ///
    /// The policy stays in place until the next
    /// [`initialize()`](Building::initialize), which reinstalls the
    /// configured built-in policy.
    pub fn with_policy(
        config: BuildingConfig,
        policy: Box<dyn DispatchPolicy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let cars = Self::fresh_cars(&config);
        info!(
            "building ready: {} floors, {} cars, capacity {}, policy {}",
            config.floors,
            config.cars,
            config.capacity,
            policy.name()
        );
        Ok(Self {
            config,
            cars,
            policy,
            tick: TickId::default(),
            metrics: BuildingMetrics::default(),
        })
    }

    fn fresh_cars(config: &BuildingConfig) -> Vec<Car> {
        (0..config.cars)
            .map(|i| Car::new(CarId(i), config.floors, config.capacity))
            .collect()
    }

    /// Discard all state and rebuild from `config`.
    ///
    /// Every car is replaced by an idle, empty car on the ground floor, and
    /// the tick counter and metrics are reset. On a validation error the
    /// building is left unchanged.
    pub fn initialize(&mut self, config: BuildingConfig) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Active configuration.
    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// Number of floors.
    pub fn floors(&self) -> u32 {
        self.config.floors
    }

    /// All cars in index order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Read access to one car.
    pub fn car(&self, id: CarId) -> Result<&Car, DispatchError> {
        self.cars
            .get(id.index())
            .ok_or_else(|| DispatchError::car(id, self.config.cars))
    }

    /// Ticks executed since initialization.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Name of the active dispatch policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Cumulative counters since initialization.
    pub fn metrics(&self) -> &BuildingMetrics {
        &self.metrics
    }

    fn check_floor(&self, floor: Floor) -> Result<Floor, DispatchError> {
        if floor.0 < self.config.floors {
            Ok(floor)
        } else {
            Err(DispatchError::floor(floor, self.config.floors))
        }
    }

    /// Assign a hall call at `origin` to a car.
    ///
    /// # Errors
    ///
    /// [`DispatchError::FloorOutOfRange`] for an origin outside the
    /// building, [`DispatchError::NoCarAvailable`] when the policy finds no
    /// car that can take the call.
    pub fn request_car(
        &mut self,
        origin: Floor,
        direction: Direction,
    ) -> Result<CarId, DispatchError> {
        let origin = self.check_floor(origin)?;
        let call = HallCall::new(origin, direction);
        let Some(id) = self.policy.select(&self.cars, &call) else {
            self.metrics.calls_rejected += 1;
            debug!("hall call {origin}{direction} rejected: no car can accept");
            return Err(DispatchError::NoCarAvailable);
        };
        let car = self
            .cars
            .get_mut(id.index())
            .ok_or_else(|| DispatchError::car(id, self.config.cars))?;
        if !car.offer(call) {
            // The policy broke its contract; treat as no acceptor.
            self.metrics.calls_rejected += 1;
            debug!(
                "hall call {origin}{direction} rejected: policy {} chose car {id} which cannot accept",
                self.policy.name()
            );
            return Err(DispatchError::NoCarAvailable);
        }
        self.metrics.calls_accepted += 1;
        debug!("hall call {origin}{direction} assigned to car {id}");
        Ok(id)
    }

    /// In-car destination press on car `car`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::CarOutOfRange`] or
    /// [`DispatchError::FloorOutOfRange`]; the building is unchanged.
    pub fn press_destination(&mut self, car: CarId, floor: Floor) -> Result<(), DispatchError> {
        let floor = self.check_floor(floor)?;
        let cars = self.config.cars;
        let target = self
            .cars
            .get_mut(car.index())
            .ok_or_else(|| DispatchError::car(car, cars))?;
        target.press(floor);
        self.metrics.presses += 1;
        debug!("car {car} destination {floor} pressed");
        Ok(())
    }

    /// Advance every car one time unit, in index order.
    pub fn tick(&mut self) -> TickReport {
        self.tick = self.tick.next();
        let cars = self.cars.iter_mut().map(Car::tick).collect();
        let report = TickReport {
            tick: self.tick,
            cars,
        };
        self.metrics.record_tick(&report);
        trace!("tick {} complete, {} cars moved", report.tick, report.moved());
        report
    }

    /// Snapshot of one car.
    pub fn state(&self, car: CarId) -> Result<CarSnapshot, DispatchError> {
        self.car(car).map(Car::snapshot)
    }

    /// State string `"<floor>-<U|D|I>-<occupancy>"` of one car.
    pub fn state_string(&self, car: CarId) -> Result<String, DispatchError> {
        self.state(car).map(|s| s.to_string())
    }

    /// Snapshots of every car in index order.
    pub fn snapshots(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(Car::snapshot).collect()
    }
}

impl std::fmt::Debug for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Building")
            .field("config", &self.config)
            .field("policy", &self.policy.name())
            .field("tick", &self.tick)
            .field("cars", &self.snapshots())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyKind;
    use lift_core::Heading;
    use proptest::prelude::*;

    fn building(floors: u32, cars: u32, capacity: u32) -> Building {
        Building::new(BuildingConfig::new(floors, cars, capacity)).unwrap()
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn new_building_reports_initial_state() {
        let b = building(6, 3, 2);
        assert_eq!(b.snapshots(), vec![CarSnapshot::INITIAL; 3]);
        assert_eq!(b.current_tick(), TickId(0));
        assert_eq!(b.policy_name(), "first_fit");
    }

    #[test]
    fn new_rejects_invalid_config() {
        match Building::new(BuildingConfig::new(0, 1, 1)) {
            Err(ConfigError::ZeroFloors) => {}
            other => panic!("expected ZeroFloors, got {other:?}"),
        }
    }

    #[test]
    fn initialize_failure_leaves_building_intact() {
        let mut b = building(6, 1, 2);
        b.press_destination(CarId(0), Floor(3)).unwrap();
        b.tick();
        assert!(b.initialize(BuildingConfig::new(6, 0, 2)).is_err());
        assert_eq!(b.state_string(CarId(0)).unwrap(), "1-U-1");
        assert_eq!(b.current_tick(), TickId(1));
    }

    #[test]
    fn initialize_resets_everything() {
        let mut b = building(6, 1, 2);
        b.request_car(Floor(2), Direction::Up).unwrap();
        b.tick();
        b.initialize(BuildingConfig::new(8, 2, 3)).unwrap();
        assert_eq!(b.snapshots(), vec![CarSnapshot::INITIAL; 2]);
        assert_eq!(b.metrics(), &BuildingMetrics::default());
        assert_eq!(b.current_tick(), TickId(0));
        assert_eq!(b.floors(), 8);
    }

    #[test]
    fn request_out_of_range_floor_is_rejected() {
        let mut b = building(6, 1, 2);
        assert_eq!(
            b.request_car(Floor(6), Direction::Up),
            Err(DispatchError::FloorOutOfRange {
                floor: 6,
                floors: 6
            })
        );
        assert_eq!(b.metrics().calls_rejected, 0);
    }

    #[test]
    fn press_validates_car_and_floor() {
        let mut b = building(6, 2, 2);
        assert_eq!(
            b.press_destination(CarId(2), Floor(1)),
            Err(DispatchError::CarOutOfRange { car: 2, cars: 2 })
        );
        assert_eq!(
            b.press_destination(CarId(0), Floor(9)),
            Err(DispatchError::FloorOutOfRange {
                floor: 9,
                floors: 6
            })
        );
        assert_eq!(b.snapshots(), vec![CarSnapshot::INITIAL; 2]);
    }

    #[test]
    fn state_for_unknown_car_is_rejected() {
        let b = building(6, 1, 2);
        assert!(matches!(
            b.state(CarId(5)),
            Err(DispatchError::CarOutOfRange { car: 5, cars: 1 })
        ));
    }

    #[test]
    fn nearest_car_policy_is_used_when_configured() {
        init_logger();
        let cfg = BuildingConfig::new(10, 2, 4).with_policy(PolicyKind::NearestCar);
        let mut b = Building::new(cfg).unwrap();
        b.press_destination(CarId(1), Floor(9)).unwrap();
        for _ in 0..5 {
            b.tick();
        }
        // Car 1 is at floor 5 heading up; car 0 is idle at 0.
        assert_eq!(b.request_car(Floor(7), Direction::Up), Ok(CarId(1)));
        assert_eq!(b.request_car(Floor(2), Direction::Up), Ok(CarId(0)));
    }

    #[test]
    fn metrics_accumulate() {
        init_logger();
        let mut b = building(6, 1, 1);
        b.request_car(Floor(0), Direction::Up).unwrap();
        b.press_destination(CarId(0), Floor(2)).unwrap();
        assert_eq!(
            b.request_car(Floor(1), Direction::Down),
            Err(DispatchError::NoCarAvailable)
        );
        b.tick();
        b.tick();
        let m = b.metrics();
        assert_eq!(m.calls_accepted, 1);
        assert_eq!(m.calls_rejected, 1);
        assert_eq!(m.presses, 1);
        assert_eq!(m.ticks, 2);
        assert_eq!(m.floors_moved, 2);
        assert_eq!(m.alighted, 1);
        assert_eq!(m.idle_transitions, 1);
    }

    #[test]
    fn tick_report_numbers_ticks_from_one() {
        let mut b = building(4, 2, 1);
        let r = b.tick();
        assert_eq!(r.tick, TickId(1));
        assert_eq!(r.cars.len(), 2);
        assert_eq!(r.car(CarId(1)).map(|c| c.to), Some(Heading::Idle));
        assert_eq!(r.moved(), 0);
    }

    proptest! {
        #[test]
        fn reinitialization_is_idempotent(
            floors in 1u32..20,
            cars in 1u32..6,
            capacity in 1u32..10,
        ) {
            let cfg = BuildingConfig::new(floors, cars, capacity);
            let mut b = Building::new(cfg.clone()).unwrap();
            b.initialize(cfg.clone()).unwrap();
            let once = b.snapshots();
            b.initialize(cfg).unwrap();
            prop_assert_eq!(&once, &b.snapshots());
            prop_assert!(once.iter().all(|s| s.to_string() == "0-I-0"));
        }

        #[test]
        fn out_of_range_origin_is_always_rejected(
            floors in 1u32..20,
            over in 0u32..100,
            going_up in any::<bool>(),
        ) {
            let mut b = Building::new(BuildingConfig::new(floors, 2, 2)).unwrap();
            let dir = if going_up { Direction::Up } else { Direction::Down };
            let res = b.request_car(Floor(floors + over), dir);
            let is_floor_error = matches!(res, Err(DispatchError::FloorOutOfRange { .. }));
            prop_assert!(is_floor_error);
        }

        #[test]
        fn random_workload_keeps_invariants(
            ops in prop::collection::vec((0u8..3, 0u32..3, 0u32..8, any::<bool>()), 0..80),
        ) {
            let capacity = 2;
            let mut b = Building::new(BuildingConfig::new(8, 3, capacity)).unwrap();
            for (kind, car, floor, up) in ops {
                match kind {
                    0 => {
                        let dir = if up { Direction::Up } else { Direction::Down };
                        let _ = b.request_car(Floor(floor), dir);
                    }
                    1 => b.press_destination(CarId(car), Floor(floor)).unwrap(),
                    _ => {
                        b.tick();
                    }
                }
                for car in b.cars() {
                    prop_assert!(car.occupancy() <= capacity);
                    prop_assert!(car.floor() < Floor(8));
                    let empty = car.destinations().next().is_none() && car.pending().next().is_none();
                    prop_assert_eq!(car.is_idle(), empty);
                }
            }
        }
    }
}
