//! Building configuration and validation.

use lift_core::ConfigError;
use lift_dispatch::{DispatchPolicy, FirstFit, NearestCar};

/// Largest floor or car count, so every index fits the `i32` sentinel surface.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

// ── PolicyKind ──────────────────────────────────────────────────

/// Built-in dispatch policy selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyKind {
    /// Lowest-indexed car that can accept the call.
    #[default]
    FirstFit,
    /// Accepting car closest to the call's origin.
    NearestCar,
}

impl PolicyKind {
    pub(crate) fn build(self) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::FirstFit => Box::new(FirstFit),
            PolicyKind::NearestCar => Box::new(NearestCar),
        }
    }
}

// ── BuildingConfig ──────────────────────────────────────────────

/// Dimensions and dispatch policy of a building.
///
/// Every field must be at least 1. Validation rejects out-of-range values;
/// it never clamps them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingConfig {
    /// Number of floors; valid floors are `0..floors`.
    pub floors: u32,
    /// Number of cars.
    pub cars: u32,
    /// Per-car passenger capacity.
    pub capacity: u32,
    /// Hall-call dispatch policy.
    pub policy: PolicyKind,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: 10,
            cars: 1,
            capacity: 8,
            policy: PolicyKind::FirstFit,
        }
    }
}

impl BuildingConfig {
    /// A config with the given dimensions and the default policy.
    pub fn new(floors: u32, cars: u32, capacity: u32) -> Self {
        Self {
            floors,
            cars,
            capacity,
            policy: PolicyKind::default(),
        }
    }

    /// Replace the dispatch policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floors == 0 {
            return Err(ConfigError::ZeroFloors);
        }
        if self.cars == 0 {
            return Err(ConfigError::ZeroCars);
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        for (name, value) in [("floors", self.floors), ("cars", self.cars)] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::TooLarge {
                    name,
                    value: u64::from(value),
                    max: u64::from(MAX_DIMENSION),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = BuildingConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.floors, 10);
        assert_eq!(cfg.policy, PolicyKind::FirstFit);
    }

    #[test]
    fn validate_zero_dimensions_fail() {
        match BuildingConfig::new(0, 1, 1).validate() {
            Err(ConfigError::ZeroFloors) => {}
            other => panic!("expected ZeroFloors, got {other:?}"),
        }
        match BuildingConfig::new(5, 0, 1).validate() {
            Err(ConfigError::ZeroCars) => {}
            other => panic!("expected ZeroCars, got {other:?}"),
        }
        match BuildingConfig::new(5, 1, 0).validate() {
            Err(ConfigError::ZeroCapacity) => {}
            other => panic!("expected ZeroCapacity, got {other:?}"),
        }
    }

    #[test]
    fn validate_oversized_floors_fail() {
        let cfg = BuildingConfig::new(u32::MAX, 1, 1);
        match cfg.validate() {
            Err(ConfigError::TooLarge { name: "floors", .. }) => {}
            other => panic!("expected TooLarge(floors), got {other:?}"),
        }
        assert!(BuildingConfig::new(MAX_DIMENSION, 1, 1).validate().is_ok());
    }

    #[test]
    fn with_policy_overrides_default() {
        let cfg = BuildingConfig::new(6, 2, 2).with_policy(PolicyKind::NearestCar);
        assert_eq!(cfg.policy, PolicyKind::NearestCar);
        assert_eq!(cfg.policy.build().name(), "nearest_car");
        assert_eq!(PolicyKind::FirstFit.build().name(), "first_fit");
    }
}
