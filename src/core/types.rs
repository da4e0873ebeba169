use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// A parts-per-million figure, used for oscillator stability
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Ppm(pub f64);

impl Ppm {
    /// Creates a new ppm value
    pub fn new(value: f64) -> Self {
        Ppm(value)
    }

    /// Returns the value as a dimensionless fraction
    pub fn as_fraction(&self) -> f64 {
        self.0 / 1e6
    }
}

/// Configuration for the drift budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Propagation speed used for time-of-flight conversion, in meters per second
    pub speed_of_light: f64,
    /// Interval between clock synchronizations
    #[serde(serialize_with = "super::serde::serialize_duration")]
    #[serde(deserialize_with = "super::serde::deserialize_duration")]
    pub sync_interval: Duration,
    /// Fractional frequency error of the clock source
    pub stability: Ppm,
}

impl BudgetConfig {
    /// Checks that the configuration is inside the valid input domain
    pub fn validate(&self) -> Result<()> {
        if !self.speed_of_light.is_finite() || self.speed_of_light <= 0.0 {
            return Err(Error::invalid_input(format!(
                "speed of light must be a positive finite number, got {}",
                self.speed_of_light
            )));
        }
        if !self.stability.0.is_finite() || self.stability.0 < 0.0 {
            return Err(Error::invalid_input(format!(
                "stability must be a non-negative finite number, got {} ppm",
                self.stability.0
            )));
        }
        Ok(())
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        BudgetConfig {
            speed_of_light: super::SPEED_OF_LIGHT,
            sync_interval: Duration::from_millis(super::DEFAULT_SYNC_INTERVAL_MS),
            stability: Ppm(super::DEFAULT_STABILITY_PPM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_fraction() {
        let stability = Ppm::new(3.0);
        assert_eq!(stability.as_fraction(), 3e-6);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = BudgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speed_of_light, 3.0e8);
        assert_eq!(config.sync_interval, Duration::from_millis(10));
        assert_eq!(config.stability, Ppm(3.0));
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let mut config = BudgetConfig::default();
        config.speed_of_light = 0.0;
        assert!(config.validate().is_err());

        let mut config = BudgetConfig::default();
        config.speed_of_light = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = BudgetConfig::default();
        config.stability = Ppm(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = BudgetConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: BudgetConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.speed_of_light, config.speed_of_light);
        assert_eq!(deserialized.sync_interval, config.sync_interval);
        assert_eq!(deserialized.stability, config.stability);
    }
}
