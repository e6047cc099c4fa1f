//! Job model.
//!
//! A job is a quantity of identical pieces that all need the same process
//! and the same per-piece cycle time. Its demand is always expressed in
//! minutes and is divisible into whole pieces only.

use serde::{Deserialize, Serialize};

use super::Process;

/// A job to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Required process.
    pub process: Process,
    /// Number of pieces.
    pub quantity: u32,
    /// Minutes per piece.
    pub cycle_mins: u32,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, process: Process, quantity: u32, cycle_mins: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            process,
            quantity,
            cycle_mins,
        }
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Total demand in minutes (quantity × cycle time).
    #[inline]
    pub fn demand_minutes(&self) -> u32 {
        self.quantity.saturating_mul(self.cycle_mins)
    }

    /// Whether the job asks for any work at all.
    pub fn has_demand(&self) -> bool {
        self.demand_minutes() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1", Process::Mill, 24, 10).with_name("Bracket");
        assert_eq!(job.id, "J1");
        assert_eq!(job.name, "Bracket");
        assert_eq!(job.process, Process::Mill);
        assert_eq!(job.demand_minutes(), 240);
        assert!(job.has_demand());
    }

    #[test]
    fn test_job_without_demand() {
        assert!(!Job::new("J1", Process::Turn, 0, 10).has_demand());
        assert!(!Job::new("J2", Process::Turn, 10, 0).has_demand());
    }
}
