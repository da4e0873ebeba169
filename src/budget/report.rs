use std::fmt;

use crate::util;

/// Human-readable rendering of a drift budget
///
/// Values are converted to the display units (nanoseconds and millimeters)
/// and formatted with exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetReport {
    /// Accumulated clock drift in nanoseconds
    pub drift_ns: f64,
    /// Induced distance error in millimeters
    pub distance_error_mm: f64,
}

impl BudgetReport {
    /// Creates a report from drift in seconds and distance error in meters
    pub(crate) fn new(drift_secs: f64, distance_error_m: f64) -> Self {
        BudgetReport {
            drift_ns: util::secs_to_nanos(drift_secs),
            distance_error_mm: util::meters_to_millimeters(distance_error_m),
        }
    }
}

impl fmt::Display for BudgetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "drift: {:.2} (ns)\ndistance error {:.2} (mm)",
            self.drift_ns, self.distance_error_mm
        )
    }
}
