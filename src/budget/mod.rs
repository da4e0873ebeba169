//! Drift budget computation
//!
//! Given a synchronization interval and a clock stability figure, this module
//! derives the accumulated clock drift and the distance error that drift
//! induces in a time-of-flight range measurement.

pub mod calculator;
pub mod report;

pub use self::calculator::DriftBudget;
pub use self::report::BudgetReport;
