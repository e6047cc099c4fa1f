//! Input validation for a shop catalog.
//!
//! Checks the machines, employees and jobs handed to the scheduler and
//! reports every problem found. Detects:
//! - Duplicate IDs
//! - Jobs with no demand (zero quantity or zero cycle time)
//! - Jobs whose cycle time cannot fit in one shift
//! - Multi-piece jobs whose cycle time is shorter than the walk buffer
//! - Jobs whose process no machine supports
//! - Employees with no daily capacity
//!
//! Validation is advisory. The scheduler accepts any catalog and degrades
//! gracefully; these checks exist so callers can surface problems early.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Employee, Job, Machine, ShiftCalendar};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A job has zero quantity or zero cycle time.
    EmptyJob,
    /// A single piece takes longer than a shift.
    CycleExceedsShift,
    /// Pieces come faster than the walk buffer, so no operator can run them.
    CycleBelowWalkBuffer,
    /// No machine supports the job's process.
    NoCapableMachine,
    /// An employee has zero daily hours.
    NoCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog against a calendar.
///
/// Checks:
/// 1. No duplicate machine, employee or job IDs
/// 2. Every job has a positive quantity and cycle time
/// 3. Every job's cycle time fits in one shift
/// 4. Multi-piece jobs cycle no faster than the walk buffer
/// 5. Every job's process is supported by at least one machine
/// 6. Every employee has a positive daily capacity
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    machines: &[Machine],
    employees: &[Employee],
    jobs: &[Job],
    calendar: &ShiftCalendar,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut machine_ids = HashSet::new();
    for m in machines {
        if !machine_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate machine ID: {}", m.id),
            ));
        }
    }

    let mut employee_ids = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        if e.hours_per_day == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCapacity,
                format!("Employee '{}' has no daily hours", e.id),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.quantity == 0 || job.cycle_mins == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!(
                    "Job '{}' has no demand ({} pcs × {} min)",
                    job.id, job.quantity, job.cycle_mins
                ),
            ));
        } else if job.cycle_mins > calendar.shift_minutes {
            errors.push(ValidationError::new(
                ValidationErrorKind::CycleExceedsShift,
                format!(
                    "Job '{}' cycle time {} min exceeds the {} min shift",
                    job.id, job.cycle_mins, calendar.shift_minutes
                ),
            ));
        } else if job.quantity > 1 && job.cycle_mins < calendar.walk_buffer {
            errors.push(ValidationError::new(
                ValidationErrorKind::CycleBelowWalkBuffer,
                format!(
                    "Job '{}' cycle time {} min is below the {} min walk buffer",
                    job.id, job.cycle_mins, calendar.walk_buffer
                ),
            ));
        }

        if !machines.iter().any(|m| m.supports(job.process)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoCapableMachine,
                format!("Job '{}' needs '{}' but no machine supports it", job.id, job.process),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Shift};

    fn sample_machines() -> Vec<Machine> {
        vec![
            Machine::new("M1").with_name("Mill 1").with_process(Process::Mill),
            Machine::new("M2").with_name("Lathe 1").with_process(Process::Turn),
        ]
    }

    fn sample_employees() -> Vec<Employee> {
        vec![
            Employee::new("E1", Shift::Day).with_skill(Process::Mill),
            Employee::new("E2", Shift::Night).with_skill(Process::Turn),
        ]
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("J1", Process::Mill, 24, 10),
            Job::new("J2", Process::Turn, 60, 8),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_catalog() {
        let cal = ShiftCalendar::default();
        let (machines, employees, jobs) = (sample_machines(), sample_employees(), sample_jobs());
        assert!(validate_catalog(&machines, &employees, &jobs, &cal).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let cal = ShiftCalendar::default();
        let machines = vec![Machine::new("M1").with_process(Process::Mill), Machine::new("M1")];
        let employees = vec![Employee::new("E1", Shift::Day), Employee::new("E1", Shift::Night)];
        let jobs = vec![
            Job::new("J1", Process::Mill, 1, 1),
            Job::new("J1", Process::Mill, 1, 1),
        ];

        let errors = validate_catalog(&machines, &employees, &jobs, &cal).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateId; 3]);
        assert!(errors[0].message.contains("machine"));
        assert!(errors[1].message.contains("employee"));
        assert!(errors[2].message.contains("job"));
    }

    #[test]
    fn test_empty_job() {
        let cal = ShiftCalendar::default();
        let jobs = vec![Job::new("J1", Process::Mill, 0, 10)];
        let errors = validate_catalog(&sample_machines(), &[], &jobs, &cal).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyJob]);
    }

    #[test]
    fn test_cycle_exceeds_shift() {
        let cal = ShiftCalendar::default();
        let jobs = vec![Job::new("J1", Process::Mill, 1, 481)];
        let errors = validate_catalog(&sample_machines(), &[], &jobs, &cal).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::CycleExceedsShift]);

        let jobs = vec![Job::new("J1", Process::Mill, 1, 480)];
        assert!(validate_catalog(&sample_machines(), &[], &jobs, &cal).is_ok());
    }

    #[test]
    fn test_cycle_below_walk_buffer() {
        let cal = ShiftCalendar::default();
        let jobs = vec![Job::new("J1", Process::Mill, 5, 1)];
        let errors = validate_catalog(&sample_machines(), &[], &jobs, &cal).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::CycleBelowWalkBuffer]);
        assert_eq!(
            errors[0].to_string(),
            "Job 'J1' cycle time 1 min is below the 2 min walk buffer"
        );

        // A single piece never meets itself.
        let jobs = vec![Job::new("J1", Process::Mill, 1, 1)];
        assert!(validate_catalog(&sample_machines(), &[], &jobs, &cal).is_ok());
        let jobs = vec![Job::new("J1", Process::Mill, 5, 2)];
        assert!(validate_catalog(&sample_machines(), &[], &jobs, &cal).is_ok());
    }

    #[test]
    fn test_no_capable_machine() {
        let cal = ShiftCalendar::default();
        let machines = vec![Machine::new("M1").with_process(Process::Mill)];
        let jobs = vec![Job::new("J1", Process::Turn, 5, 5)];
        let errors = validate_catalog(&machines, &[], &jobs, &cal).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NoCapableMachine]);
        assert_eq!(errors[0].to_string(), "Job 'J1' needs 'turn' but no machine supports it");
    }

    #[test]
    fn test_employee_without_hours() {
        let cal = ShiftCalendar::default();
        let employees = vec![Employee::new("E1", Shift::Day).with_hours_per_day(0)];
        let errors = validate_catalog(&[], &employees, &[], &cal).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NoCapacity]);
    }

    #[test]
    fn test_multiple_errors() {
        let cal = ShiftCalendar::default();
        let jobs = vec![
            Job::new("J1", Process::Turn, 0, 5),
            Job::new("J2", Process::Turn, 3, 5),
        ];
        let errors = validate_catalog(&[], &[], &jobs, &cal).unwrap_err();
        // J1: empty + no machine, J2: no machine.
        assert_eq!(errors.len(), 3);
    }
}
