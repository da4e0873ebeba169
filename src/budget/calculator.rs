use std::time::Duration;

use tracing::debug;

use crate::core::{BudgetConfig, Error, Result};
use super::report::BudgetReport;

/// Drift budget for one synchronization interval
///
/// Holds a validated configuration and derives the accumulated clock drift
/// and the corresponding time-of-flight distance error.
pub struct DriftBudget {
    /// Configuration
    config: BudgetConfig,
}

impl DriftBudget {
    /// Creates a new drift budget from a configuration
    pub fn new(config: BudgetConfig) -> Result<Self> {
        config.validate()?;
        Ok(DriftBudget { config })
    }

    /// Returns the clock drift accumulated over one sync interval, in seconds
    pub fn drift_seconds(&self) -> f64 {
        self.config.sync_interval.as_secs_f64() * self.config.stability.as_fraction()
    }

    /// Returns the accumulated clock drift as a duration
    ///
    /// Fails when the drift is too large to represent as a `Duration`.
    pub fn drift(&self) -> Result<Duration> {
        let secs = self.drift_seconds();
        Duration::try_from_secs_f64(secs).map_err(|_| {
            Error::invalid_input(format!("drift of {} seconds is out of range", secs))
        })
    }

    /// Returns the distance error the drift induces in a range measurement, in meters
    pub fn distance_error_meters(&self) -> f64 {
        self.config.speed_of_light * self.drift_seconds()
    }

    /// Renders the budget into its human-readable report
    pub fn report(&self) -> BudgetReport {
        let drift_secs = self.drift_seconds();
        let distance_error_m = self.distance_error_meters();
        debug!(
            drift_secs,
            distance_error_m,
            "computed drift budget"
        );
        BudgetReport::new(drift_secs, distance_error_m)
    }
}
