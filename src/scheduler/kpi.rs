//! Week plan metrics (KPIs).
//!
//! Derives backlog and load figures from a finished plan and its input
//! catalog. The scheduler reports shortfall only implicitly, by placing
//! fewer minutes than a job demands; this is where it becomes explicit.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Minutes by job | Sum of block minutes per job |
//! | Backlog | Jobs whose placed minutes fall short of demand |
//! | Unassigned minutes | Minutes placed without an operator |
//! | Employee day load | Booked minutes per day, capped at daily capacity |
//! | Employee week left | days × daily capacity − booked minutes |
//! | Avg day-shift utilization | Mean of machine day-shift minutes / capacity |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Employee, Job, ShiftCalendar, WeekPlan};

/// A job that did not get all of its demand placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogEntry {
    /// Job identifier.
    pub job_id: String,
    /// Minutes the job demands.
    pub demand_minutes: u32,
    /// Minutes placed in the plan.
    pub placed_minutes: u32,
}

impl BacklogEntry {
    /// Minutes still unplaced.
    pub fn remaining_minutes(&self) -> u32 {
        self.demand_minutes.saturating_sub(self.placed_minutes)
    }
}

/// Week plan performance indicators.
///
/// All time values are in minutes.
#[derive(Debug, Clone, Serialize)]
pub struct PlanKpi {
    /// Placed minutes per job.
    pub minutes_by_job: BTreeMap<String, u32>,
    /// Jobs short of demand, in job order.
    pub backlog: Vec<BacklogEntry>,
    /// Minutes placed without an operator.
    pub unassigned_minutes: u32,
    /// Employee id → booked minutes per day, capped at daily capacity.
    pub employee_day_minutes: BTreeMap<String, Vec<u32>>,
    /// Employee id → weekly capacity left (negative when overbooked).
    pub employee_week_left: BTreeMap<String, i64>,
    /// Mean day-shift utilization over all machines (0.0..1.0).
    pub avg_day_shift_utilization: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan and its input catalog.
    ///
    /// # Arguments
    /// * `plan` - The plan, including any manual blocks.
    /// * `jobs` - Input jobs (for demand).
    /// * `employees` - Input employees (for daily capacity).
    /// * `calendar` - Horizon the plan was built on.
    pub fn calculate(
        plan: &WeekPlan,
        jobs: &[Job],
        employees: &[Employee],
        calendar: &ShiftCalendar,
    ) -> Self {
        let days = calendar.days as usize;

        let mut minutes_by_job: BTreeMap<String, u32> =
            jobs.iter().map(|j| (j.id.clone(), 0)).collect();
        let mut booked: BTreeMap<String, Vec<u32>> = employees
            .iter()
            .map(|e| (e.id.clone(), vec![0; days]))
            .collect();
        let mut unassigned_minutes = 0;

        for a in &plan.assignments {
            *minutes_by_job.entry(a.job_id.clone()).or_insert(0) += a.minutes;
            match &a.employee_id {
                Some(eid) => {
                    if let Some(day) = booked
                        .get_mut(eid)
                        .and_then(|row| row.get_mut(a.day as usize))
                    {
                        *day += a.minutes;
                    }
                }
                None => unassigned_minutes += a.minutes,
            }
        }

        let backlog = jobs
            .iter()
            .filter_map(|j| {
                let placed = minutes_by_job.get(&j.id).copied().unwrap_or(0);
                (placed < j.demand_minutes()).then(|| BacklogEntry {
                    job_id: j.id.clone(),
                    demand_minutes: j.demand_minutes(),
                    placed_minutes: placed,
                })
            })
            .collect();

        let mut employee_day_minutes = BTreeMap::new();
        let mut employee_week_left = BTreeMap::new();
        for e in employees {
            let row = booked.remove(&e.id).unwrap_or_else(|| vec![0; days]);
            let total: i64 = row.iter().map(|&m| i64::from(m)).sum();
            let capacity = i64::from(e.daily_minutes()) * i64::from(calendar.days);
            employee_week_left.insert(e.id.clone(), capacity - total);

            let capped: Vec<u32> = row.into_iter().map(|m| m.min(e.daily_minutes())).collect();
            employee_day_minutes.insert(e.id.clone(), capped);
        }

        let avg_day_shift_utilization = {
            let capacity = f64::from(calendar.shift_minutes) * days as f64;
            if plan.utilization.is_empty() || capacity <= 0.0 {
                0.0
            } else {
                let sum: f64 = plan
                    .utilization
                    .values()
                    .map(|row| row.iter().map(|&m| f64::from(m)).sum::<f64>() / capacity)
                    .sum();
                sum / plan.utilization.len() as f64
            }
        };

        Self {
            minutes_by_job,
            backlog,
            unassigned_minutes,
            employee_day_minutes,
            employee_week_left,
            avg_day_shift_utilization,
        }
    }

    /// Whether every job got its full demand placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.backlog.is_empty()
    }
}
