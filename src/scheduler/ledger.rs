//! Resource ledger: committed machine minutes and operator event times.
//!
//! The ledger is a thin additive store. It never rejects a commit; callers
//! check [`ResourceLedger::used`] against shift capacity before committing.
//! Ordered containers keep every read deterministic.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Slot;

/// Run-scoped record of what has been committed so far.
#[derive(Debug, Clone, Default)]
pub struct ResourceLedger {
    /// machine id → slot → minutes committed.
    machine_minutes: BTreeMap<String, BTreeMap<Slot, u32>>,
    /// employee id → slot → piece event offsets (minutes from shift start).
    employee_events: BTreeMap<String, BTreeMap<Slot, BTreeSet<u32>>>,
}

impl ResourceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total minutes committed on a machine across every slot.
    ///
    /// Only used to pick the least-loaded machine for a job.
    pub fn load(&self, machine_id: &str) -> u64 {
        self.machine_minutes
            .get(machine_id)
            .map(|slots| slots.values().map(|&m| u64::from(m)).sum())
            .unwrap_or(0)
    }

    /// Minutes committed on a machine in one slot.
    pub fn used(&self, machine_id: &str, slot: Slot) -> u32 {
        self.machine_minutes
            .get(machine_id)
            .and_then(|slots| slots.get(&slot))
            .copied()
            .unwrap_or(0)
    }

    /// Adds minutes to a machine slot.
    pub fn commit(&mut self, machine_id: &str, slot: Slot, minutes: u32) {
        let used = self
            .machine_minutes
            .entry(machine_id.to_string())
            .or_default()
            .entry(slot)
            .or_insert(0);
        *used += minutes;
    }

    /// Event offsets already committed for an employee in one slot, ascending.
    pub fn events(&self, employee_id: &str, slot: Slot) -> Option<&BTreeSet<u32>> {
        self.employee_events
            .get(employee_id)
            .and_then(|slots| slots.get(&slot))
    }

    /// Adds event offsets for an employee in one slot.
    pub fn commit_events(
        &mut self,
        employee_id: &str,
        slot: Slot,
        offsets: impl IntoIterator<Item = u32>,
    ) {
        self.employee_events
            .entry(employee_id.to_string())
            .or_default()
            .entry(slot)
            .or_default()
            .extend(offsets);
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.machine_minutes.is_empty() && self.employee_events.is_empty()
    }
}
