//! Shop-floor domain models.
//!
//! Provides the input catalog types (machines, employees, jobs), the shift
//! calendar that fixes the planning horizon, and the week plan produced by
//! the scheduler.
//!
//! # Domain Mappings
//!
//! | Type | Role |
//! |------|------|
//! | Machine | Capability-constrained processing resource |
//! | Employee | Shift-bound operator with process skills |
//! | Job | Quantity × cycle time of one process |
//! | Assignment | One committed block of pieces |
//! | WeekPlan | Ordered blocks + day-shift utilization |

mod calendar;
mod job;
mod plan;
mod resource;

pub use calendar::{CalendarError, Shift, ShiftCalendar, Slot};
pub use job::Job;
pub use plan::{Assignment, WeekPlan};
pub use resource::{Employee, Machine, Process};
