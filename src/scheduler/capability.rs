//! Capability index: sorted, read-only resource pools.
//!
//! Machines are sorted by name and pooled per supported process (a machine
//! supporting several processes appears in each pool). Employees are
//! sorted by shift (day first) then name and pooled per shift. Sorting is
//! stable, so equal names keep catalog order.

use std::collections::BTreeMap;

use crate::models::{Employee, Machine, Process, Shift};

/// Read-only views over the catalog used to restrict candidate search.
#[derive(Debug, Clone)]
pub struct CapabilityIndex<'a> {
    machines: Vec<&'a Machine>,
    employees: Vec<&'a Employee>,
    by_process: BTreeMap<Process, Vec<&'a Machine>>,
    by_shift: BTreeMap<Shift, Vec<&'a Employee>>,
}

impl<'a> CapabilityIndex<'a> {
    /// Builds the index from catalog slices.
    pub fn build(machines: &'a [Machine], employees: &'a [Employee]) -> Self {
        let mut machines: Vec<&Machine> = machines.iter().collect();
        machines.sort_by(|a, b| a.name.cmp(&b.name));

        let mut employees: Vec<&Employee> = employees.iter().collect();
        employees.sort_by(|a, b| a.shift.cmp(&b.shift).then_with(|| a.name.cmp(&b.name)));

        let by_process = Process::ALL
            .iter()
            .map(|&p| (p, machines.iter().copied().filter(|m| m.supports(p)).collect()))
            .collect();

        let by_shift = Shift::ALL
            .iter()
            .map(|&s| (s, employees.iter().copied().filter(|e| e.shift == s).collect()))
            .collect();

        Self {
            machines,
            employees,
            by_process,
            by_shift,
        }
    }

    /// All machines, sorted by name.
    pub fn machines(&self) -> &[&'a Machine] {
        &self.machines
    }

    /// All employees, sorted by shift then name.
    pub fn employees(&self) -> &[&'a Employee] {
        &self.employees
    }

    /// Machines capable of a process, in sorted order.
    pub fn machines_for(&self, process: Process) -> &[&'a Machine] {
        self.by_process
            .get(&process)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Employees working a shift, in sorted order.
    pub fn operators_for(&self, shift: Shift) -> &[&'a Employee] {
        self.by_shift
            .get(&shift)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Employees working a shift who can operate a process.
    pub fn skilled_operators(
        &self,
        shift: Shift,
        process: Process,
    ) -> impl Iterator<Item = &'a Employee> + '_ {
        self.operators_for(shift)
            .iter()
            .copied()
            .filter(move |e| e.has_skill(process))
    }
}
