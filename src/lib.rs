//! UWB Drift: clock drift and ranging error budget for time-of-flight positioning
//!
//! This library computes the clock drift a free-running oscillator accumulates over one
//! synchronization interval and the distance error that drift induces in a UWB
//! time-of-flight range measurement.
pub mod budget;
pub mod core;

mod util;

// Re-export commonly used items
pub use crate::budget::{BudgetReport, DriftBudget};
pub use crate::core::{BudgetConfig, Error, Ppm, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
