//! Week plan (solution) model.
//!
//! A week plan is the ordered list of committed blocks plus the day-shift
//! utilization table of every machine. Blocks are append-only: once a
//! block is in the plan it is never revised.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Process, Shift, Slot};

/// One committed block: a run of same-job pieces on one machine in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Job the pieces belong to.
    pub job_id: String,
    /// Machine running the block.
    pub machine_id: String,
    /// Day index (0 = Monday).
    pub day: u32,
    /// Shift of the block.
    pub shift: Shift,
    /// First piece event, in minutes from shift start.
    pub start_offset: u32,
    /// Minutes in this block (`pieces × cycle_mins`).
    pub minutes: u32,
    /// Pieces in this block.
    pub pieces: u32,
    /// Minutes per piece.
    pub cycle_mins: u32,
    /// Process the block runs.
    pub process: Process,
    /// Operator tending the block. `None` = no qualified operator was free.
    pub employee_id: Option<String>,
}

impl Assignment {
    /// Creates an unassigned block.
    pub fn new(
        job_id: impl Into<String>,
        machine_id: impl Into<String>,
        slot: Slot,
        pieces: u32,
        cycle_mins: u32,
        process: Process,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            machine_id: machine_id.into(),
            day: slot.day,
            shift: slot.shift,
            start_offset: 0,
            minutes: pieces.saturating_mul(cycle_mins),
            pieces,
            cycle_mins,
            process,
            employee_id: None,
        }
    }

    /// Sets the start offset.
    pub fn with_start_offset(mut self, offset: u32) -> Self {
        self.start_offset = offset;
        self
    }

    /// Sets the operator.
    pub fn with_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    /// The (day, shift) slot of this block.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.shift)
    }

    /// Whether an operator was found for this block.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }

    /// Offsets of every piece event in the block.
    pub fn event_offsets(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.pieces).map(move |n| self.start_offset + n * self.cycle_mins)
    }
}

/// A complete week plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Blocks in commit order.
    pub assignments: Vec<Assignment>,
    /// Machine id → day-shift minutes committed per day.
    pub utilization: BTreeMap<String, Vec<u32>>,
}

impl WeekPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block without touching the utilization table.
    ///
    /// Used for manual overrides; the scheduler records its own blocks
    /// through the ledger.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of blocks.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// All blocks of a job.
    pub fn assignments_for_job(&self, job_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    /// All blocks on a machine.
    pub fn assignments_for_machine(&self, machine_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .collect()
    }

    /// All blocks tended by an employee.
    pub fn assignments_for_employee(&self, employee_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.employee_id.as_deref() == Some(employee_id))
            .collect()
    }

    /// Blocks with no operator.
    pub fn unassigned(&self) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| !a.is_assigned()).collect()
    }

    /// Minutes placed for a job across all blocks.
    pub fn minutes_for_job(&self, job_id: &str) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .map(|a| a.minutes)
            .sum()
    }

    /// Day-shift minutes per day for a machine, if it is in the table.
    pub fn day_shift_utilization(&self, machine_id: &str) -> Option<&[u32]> {
        self.utilization.get(machine_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> WeekPlan {
        let mut p = WeekPlan::new();
        p.add_assignment(
            Assignment::new("J1", "M1", Slot::new(0, Shift::Day), 10, 5, Process::Mill)
                .with_employee("E1"),
        );
        p.add_assignment(Assignment::new(
            "J1",
            "M1",
            Slot::new(0, Shift::Night),
            4,
            5,
            Process::Mill,
        ));
        p.add_assignment(
            Assignment::new("J2", "M2", Slot::new(1, Shift::Day), 3, 20, Process::Turn)
                .with_start_offset(7)
                .with_employee("E2"),
        );
        p
    }

    #[test]
    fn test_assignment_minutes() {
        let a = Assignment::new("J1", "M1", Slot::first(), 12, 10, Process::Mill);
        assert_eq!(a.minutes, 120);
        assert!(!a.is_assigned());
        assert_eq!(a.slot(), Slot::first());
    }

    #[test]
    fn test_event_offsets() {
        let a = Assignment::new("J1", "M1", Slot::first(), 3, 10, Process::Mill)
            .with_start_offset(2);
        let offs: Vec<u32> = a.event_offsets().collect();
        assert_eq!(offs, vec![2, 12, 22]);
    }

    #[test]
    fn test_queries() {
        let p = sample_plan();
        assert_eq!(p.assignment_count(), 3);
        assert_eq!(p.assignments_for_job("J1").len(), 2);
        assert_eq!(p.assignments_for_machine("M2").len(), 1);
        assert_eq!(p.assignments_for_employee("E1").len(), 1);
        assert_eq!(p.unassigned().len(), 1);
        assert_eq!(p.minutes_for_job("J1"), 70);
        assert_eq!(p.minutes_for_job("J99"), 0);
    }

    #[test]
    fn test_manual_assignment_leaves_utilization() {
        let mut p = WeekPlan::new();
        p.utilization.insert("M1".into(), vec![0; 7]);
        p.add_assignment(Assignment::new("J1", "M1", Slot::first(), 1, 30, Process::Mill));
        assert_eq!(p.day_shift_utilization("M1"), Some(&[0u32; 7][..]));
        assert_eq!(p.day_shift_utilization("M9"), None);
    }

    #[test]
    fn test_plan_json_shape() {
        let p = sample_plan();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["assignments"][0]["shift"], "day");
        assert_eq!(json["assignments"][1]["employee_id"], serde_json::Value::Null);
        assert_eq!(json["assignments"][2]["process"], "turn");
    }
}
