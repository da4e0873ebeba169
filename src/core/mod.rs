//! Core types for the drift budget
//!
//! This module contains the fundamental building blocks used throughout the library.

pub mod error;
pub mod serde;
pub mod types;

pub use self::error::{Error, Result};
pub use self::types::{BudgetConfig, Ppm};

/// Speed of light in meters per second, as used for time-of-flight conversion
pub const SPEED_OF_LIGHT: f64 = 3.0e8;

/// Default synchronization interval in milliseconds
pub const DEFAULT_SYNC_INTERVAL_MS: u64 = 10;

/// Default clock stability in parts-per-million
pub const DEFAULT_STABILITY_PPM: f64 = 3.0;
