//! Weekly shift scheduler and plan KPIs.
//!
//! Provides the greedy placement engine that turns a catalog of machines,
//! employees and jobs into a week plan, and metrics over the result.
//!
//! # Algorithm
//!
//! `WeekScheduler` is a deterministic, backtrack-free greedy heuristic:
//! one machine per job (least loaded), slots walked in day/night order,
//! operators chosen first-fit with a small phase search that keeps each
//! operator's piece events a walk buffer apart. It is not optimal.
//!
//! # State
//!
//! A run owns its `ResourceLedger` and reads a `CapabilityIndex`; nothing is
//! global, so independent runs can execute side by side. A single run is
//! not meant to be shared between threads.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod capability;
mod kpi;
mod ledger;
mod placement;
mod week;

pub use capability::CapabilityIndex;
pub use kpi::{BacklogEntry, PlanKpi};
pub use ledger::ResourceLedger;
pub use placement::{phase_search, Block, PlacementSearch};
pub use week::WeekScheduler;
