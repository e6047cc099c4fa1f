//! Weekly greedy scheduler (commit/advance loop).
//!
//! # Algorithm
//!
//! 1. Build the capability index (sorted pools) once.
//! 2. For each job, in caller order, pick one machine for the whole job.
//! 3. Repeatedly place a block: walk to the first open slot from the
//!    cursor, search an operator rolling forward, or fall back to an
//!    unassigned block. Commit it and resume from the cursor, since the
//!    cursor slot may still have room.
//! 4. Stop the job when its demand is placed or the horizon runs out.
//!
//! Degraded outcomes (no capable machine, horizon exhausted, no operator)
//! are part of the plan, never errors.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::BTreeMap;

use tracing::{debug, info, instrument, trace};

use crate::models::{
    Assignment, CalendarError, Employee, Job, Machine, Shift, ShiftCalendar, Slot, WeekPlan,
};

use super::placement::{Block, PlacementSearch};
use super::{CapabilityIndex, ResourceLedger};

/// Greedy weekly scheduler.
///
/// # Example
///
/// ```
/// use shift_schedule::models::{Employee, Job, Machine, Process, Shift};
/// use shift_schedule::scheduler::WeekScheduler;
///
/// let machines = vec![Machine::new("M1").with_name("Mill 1").with_process(Process::Mill)];
/// let employees = vec![Employee::new("E1", Shift::Day).with_skill(Process::Mill)];
/// let jobs = vec![Job::new("J1", Process::Mill, 24, 10)];
///
/// let plan = WeekScheduler::new().schedule(&machines, &employees, &jobs);
/// assert_eq!(plan.assignment_count(), 1);
/// assert_eq!(plan.assignments[0].employee_id.as_deref(), Some("E1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeekScheduler {
    calendar: ShiftCalendar,
}

impl WeekScheduler {
    /// Creates a scheduler over the default 7-day calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar after validating it.
    pub fn with_calendar(mut self, calendar: ShiftCalendar) -> Result<Self, CalendarError> {
        calendar.validate()?;
        self.calendar = calendar;
        Ok(self)
    }

    /// The calendar in use.
    pub fn calendar(&self) -> &ShiftCalendar {
        &self.calendar
    }

    /// Schedules jobs with a fresh ledger.
    #[instrument(skip_all, fields(
        machines = machines.len(),
        employees = employees.len(),
        jobs = jobs.len()
    ))]
    pub fn schedule(&self, machines: &[Machine], employees: &[Employee], jobs: &[Job]) -> WeekPlan {
        let index = CapabilityIndex::build(machines, employees);
        let mut ledger = ResourceLedger::new();
        self.run(&index, &mut ledger, jobs)
    }

    /// Schedules jobs against an explicit index and ledger.
    ///
    /// The ledger is mutated in place; pass a fresh one for an independent run.
    pub fn run(
        &self,
        index: &CapabilityIndex<'_>,
        ledger: &mut ResourceLedger,
        jobs: &[Job],
    ) -> WeekPlan {
        let days = self.calendar.days as usize;
        let mut plan = WeekPlan::new();
        plan.utilization = index
            .machines()
            .iter()
            .map(|m| (m.id.clone(), vec![0; days]))
            .collect::<BTreeMap<_, _>>();

        let search = PlacementSearch::new(index, &self.calendar);
        for job in jobs {
            self.place_job(&search, job, ledger, &mut plan);
        }

        info!(
            assignments = plan.assignment_count(),
            unassigned = plan.unassigned().len(),
            "week scheduled"
        );
        plan
    }

    fn place_job(
        &self,
        search: &PlacementSearch<'_, '_>,
        job: &Job,
        ledger: &mut ResourceLedger,
        plan: &mut WeekPlan,
    ) {
        if !job.has_demand() {
            debug!(job = %job.id, "job has no demand");
            return;
        }
        let cycle = job.cycle_mins;
        let mut remaining = job.demand_minutes();

        let Some(machine) = search.pick_machine(job.process, ledger) else {
            debug!(job = %job.id, process = %job.process, "no capable machine, job skipped");
            return;
        };
        debug!(job = %job.id, machine = %machine.id, demand = remaining, "machine selected");

        let mut cursor = Slot::first();
        while remaining > 0 {
            let Some(open) = search.find_open_slot(machine, cursor, cycle, ledger) else {
                break;
            };
            cursor = open;

            let want = search
                .free_pieces(machine, cursor, cycle, ledger)
                .min(remaining / cycle);
            if want == 0 {
                break;
            }

            let block = match search.find_operator(machine, job, cursor, want, ledger) {
                Some(block) => block,
                None => {
                    let Some(block) =
                        search.fallback(machine, cursor, cycle, remaining, ledger)
                    else {
                        break;
                    };
                    debug!(
                        job = %job.id,
                        slot = %block.slot,
                        pieces = block.pieces,
                        "no operator free, block unassigned"
                    );
                    cursor = block.slot;
                    block
                }
            };

            remaining -= self.commit_block(job, machine, &block, ledger, plan);
        }

        if remaining > 0 {
            debug!(job = %job.id, remaining, "horizon exhausted before demand was placed");
        }
    }

    /// Records a block in the ledger and the plan. Returns the minutes placed.
    fn commit_block(
        &self,
        job: &Job,
        machine: &Machine,
        block: &Block<'_>,
        ledger: &mut ResourceLedger,
        plan: &mut WeekPlan,
    ) -> u32 {
        let cycle = job.cycle_mins;
        let minutes = block.pieces * cycle;
        ledger.commit(&machine.id, block.slot, minutes);

        if block.slot.shift == Shift::Day {
            if let Some(day) = plan
                .utilization
                .get_mut(&machine.id)
                .and_then(|row| row.get_mut(block.slot.day as usize))
            {
                *day += minutes;
            }
        }

        let mut assignment = Assignment::new(
            &job.id,
            &machine.id,
            block.slot,
            block.pieces,
            cycle,
            job.process,
        )
        .with_start_offset(block.start_offset);

        if let Some(operator) = block.operator {
            let offsets = (0..block.pieces).map(|n| block.start_offset + n * cycle);
            ledger.commit_events(&operator.id, block.slot, offsets);
            assignment = assignment.with_employee(&operator.id);
        }

        trace!(
            job = %job.id,
            machine = %machine.id,
            slot = %block.slot,
            start = block.start_offset,
            pieces = block.pieces,
            operator = block.operator.map(|e| e.id.as_str()),
            "block committed"
        );
        plan.add_assignment(assignment);
        minutes
    }
}
