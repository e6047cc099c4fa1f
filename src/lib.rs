//! Weekly shift scheduling for a machine shop.
//!
//! Assigns jobs (a quantity of identical pieces with a fixed cycle time)
//! onto capability-constrained machines and shift-bound employees across a
//! week of day and night shifts, and reports per-machine utilization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Machine`, `Employee`, `Job`, `Assignment`,
//!   `WeekPlan`, `ShiftCalendar`, `Slot`
//! - **`scheduler`**: `WeekScheduler` (greedy placement), `CapabilityIndex`,
//!   `ResourceLedger`, `PlanKpi`
//! - **`validation`**: Catalog checks (duplicate IDs, empty jobs, uncovered processes)
//!
//! # Concurrency
//!
//! A scheduling run is synchronous and CPU-bound. Each run owns its ledger;
//! a caller sharing one catalog between threads must serialize runs.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

pub mod models;
pub mod scheduler;
pub mod validation;

#[cfg(test)]
mod test_support;
