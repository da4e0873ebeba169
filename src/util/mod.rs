//! Utility module
//!
//! This module provides common unit conversion helpers used
//! throughout the library.

/// Converts a floating-point number of seconds to nanoseconds
pub fn secs_to_nanos(secs: f64) -> f64 {
    secs * 1e9
}

/// Converts a floating-point number of meters to millimeters
pub fn meters_to_millimeters(meters: f64) -> f64 {
    meters * 1e3
}
