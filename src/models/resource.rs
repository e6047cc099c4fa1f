//! Resource models.
//!
//! Machines and employees are the two resource kinds a weekly plan draws
//! on. A machine supports one or more processes; an employee belongs to
//! exactly one shift for the whole week and may operate the processes
//! listed in their skills.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::Shift;

/// A manufacturing process category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Milling.
    Mill,
    /// Turning (lathe work).
    Turn,
}

impl Process {
    /// All known processes, in pool order.
    pub const ALL: [Process; 2] = [Process::Mill, Process::Turn];

    /// Lowercase process name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Process::Mill => "mill",
            Process::Turn => "turn",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A machine that can run jobs of the processes it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Unique machine identifier.
    pub id: String,
    /// Human-readable name. Also the sort key for tie-breaking.
    pub name: String,
    /// Supported processes.
    pub processes: BTreeSet<Process>,
}

/// An employee who tends machines during their shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The only shift this employee works.
    pub shift: Shift,
    /// Daily capacity in hours (default: 8).
    pub hours_per_day: u32,
    /// Processes this employee can operate.
    pub skills: BTreeSet<Process>,
}

impl Machine {
    /// Creates a machine with no supported processes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            processes: BTreeSet::new(),
        }
    }

    /// Sets the machine name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a supported process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.insert(process);
        self
    }

    /// Whether this machine can run the given process.
    pub fn supports(&self, process: Process) -> bool {
        self.processes.contains(&process)
    }
}

impl Employee {
    /// Creates an employee on the given shift with the default 8h day.
    pub fn new(id: impl Into<String>, shift: Shift) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            shift,
            hours_per_day: 8,
            skills: BTreeSet::new(),
        }
    }

    /// Sets the employee name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily capacity in hours.
    pub fn with_hours_per_day(mut self, hours: u32) -> Self {
        self.hours_per_day = hours;
        self
    }

    /// Adds a skill.
    pub fn with_skill(mut self, process: Process) -> Self {
        self.skills.insert(process);
        self
    }

    /// Whether this employee can operate the given process.
    pub fn has_skill(&self, process: Process) -> bool {
        self.skills.contains(&process)
    }

    /// Daily capacity in minutes.
    #[inline]
    pub fn daily_minutes(&self) -> u32 {
        self.hours_per_day.saturating_mul(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_builder() {
        let m = Machine::new("M1")
            .with_name("Haas VF-2")
            .with_process(Process::Mill)
            .with_process(Process::Turn);

        assert_eq!(m.id, "M1");
        assert_eq!(m.name, "Haas VF-2");
        assert!(m.supports(Process::Mill));
        assert!(m.supports(Process::Turn));
    }

    #[test]
    fn test_machine_without_process() {
        let m = Machine::new("M1").with_process(Process::Mill);
        assert!(!m.supports(Process::Turn));
    }

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("E1", Shift::Night)
            .with_name("Ana")
            .with_hours_per_day(10)
            .with_skill(Process::Turn);

        assert_eq!(e.shift, Shift::Night);
        assert_eq!(e.hours_per_day, 10);
        assert_eq!(e.daily_minutes(), 600);
        assert!(e.has_skill(Process::Turn));
        assert!(!e.has_skill(Process::Mill));
    }

    #[test]
    fn test_employee_default_day() {
        let e = Employee::new("E1", Shift::Day);
        assert_eq!(e.daily_minutes(), 480);
    }

    #[test]
    fn test_process_serde_lowercase() {
        let json = serde_json::to_string(&Process::Mill).unwrap();
        assert_eq!(json, "\"mill\"");
        let back: Process = serde_json::from_str("\"turn\"").unwrap();
        assert_eq!(back, Process::Turn);
        assert_eq!(Process::Turn.to_string(), "turn");
    }
}
