//! Cumulative counters for a building.
//!
//! [`BuildingMetrics`] is reset by re-initialization and updated by every
//! hall call, press and tick.

use crate::building::TickReport;

/// Counters accumulated since the building was last initialized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildingMetrics {
    /// Ticks executed.
    pub ticks: u64,
    /// Hall calls assigned to a car.
    pub calls_accepted: u64,
    /// Hall calls no car could take.
    pub calls_rejected: u64,
    /// Destination presses applied.
    pub presses: u64,
    /// Total floors travelled across all cars.
    pub floors_moved: u64,
    /// Passengers who left a car.
    pub alighted: u64,
    /// Up/Down reversals.
    pub reversals: u64,
    /// Transitions into the idle state during ticks.
    pub idle_transitions: u64,
}

impl BuildingMetrics {
    pub(crate) fn record_tick(&mut self, report: &TickReport) {
        self.ticks += 1;
        for car in &report.cars {
            self.floors_moved += u64::from(car.moved);
            self.alighted += u64::from(car.alighted);
            self.reversals += u64::from(car.reversed());
            self.idle_transitions += u64::from(car.went_idle());
        }
    }
}
