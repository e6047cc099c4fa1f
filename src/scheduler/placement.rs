//! Placement search for one block of a job.
//!
//! # Algorithm
//!
//! 1. Machine selection (once per job): least total committed minutes among
//!    capable machines, ties broken by sorted order.
//! 2. Slot walk: first slot from the cursor with room for one whole piece.
//! 3. Operator search: roll forward up to one horizon's worth of slots. In
//!    each slot, try every skill-matching operator of that shift, in sorted
//!    order, with a phase search. First fit wins.
//! 4. Fallback: if nobody fits, the block runs unassigned at the first open
//!    slot from the cursor.
//!
//! The search never backtracks past a committed block.
//!
//! # Complexity
//! O(s · e · p · n · log k) per block, where s = slots in the horizon,
//! e = operators per shift, p = walk buffer + 1 phases, n = pieces and
//! k = events already committed for the operator.

use std::collections::BTreeSet;

use crate::models::{Employee, Job, Machine, Process, ShiftCalendar, Slot};

use super::{CapabilityIndex, ResourceLedger};

/// A block chosen by the search, not yet committed.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    /// Slot the block runs in.
    pub slot: Slot,
    /// First piece event (minutes from shift start).
    pub start_offset: u32,
    /// Pieces in the block.
    pub pieces: u32,
    /// Operator, or `None` for an unassigned block.
    pub operator: Option<&'a Employee>,
}

/// Searches slots and operators for one job's blocks.
#[derive(Debug, Clone, Copy)]
pub struct PlacementSearch<'s, 'a> {
    index: &'s CapabilityIndex<'a>,
    calendar: &'s ShiftCalendar,
}

impl<'s, 'a> PlacementSearch<'s, 'a> {
    /// Creates a search over an index and calendar.
    pub fn new(index: &'s CapabilityIndex<'a>, calendar: &'s ShiftCalendar) -> Self {
        Self { index, calendar }
    }

    /// Picks the least-loaded machine capable of a process.
    ///
    /// Returns `None` when no machine supports the process.
    pub fn pick_machine(&self, process: Process, ledger: &ResourceLedger) -> Option<&'a Machine> {
        let mut best: Option<(&'a Machine, u64)> = None;
        for &machine in self.index.machines_for(process) {
            let load = ledger.load(&machine.id);
            match best {
                Some((_, best_load)) if load >= best_load => {}
                _ => best = Some((machine, load)),
            }
        }
        best.map(|(m, _)| m)
    }

    /// Whole pieces of `cycle` minutes that still fit on a machine in a slot.
    pub fn free_pieces(
        &self,
        machine: &Machine,
        slot: Slot,
        cycle: u32,
        ledger: &ResourceLedger,
    ) -> u32 {
        if cycle == 0 {
            return 0;
        }
        self.calendar
            .shift_minutes
            .saturating_sub(ledger.used(&machine.id, slot))
            / cycle
    }

    /// First slot from `from` (inclusive) with room for at least one piece.
    pub fn find_open_slot(
        &self,
        machine: &Machine,
        from: Slot,
        cycle: u32,
        ledger: &ResourceLedger,
    ) -> Option<Slot> {
        self.calendar
            .slots_from(from)
            .find(|&slot| self.free_pieces(machine, slot, cycle, ledger) > 0)
    }

    /// Finds an operator for up to `want` pieces, rolling forward from `from`.
    ///
    /// Each rolled slot caps the block by its own free machine capacity.
    pub fn find_operator(
        &self,
        machine: &Machine,
        job: &Job,
        from: Slot,
        want: u32,
        ledger: &ResourceLedger,
    ) -> Option<Block<'a>> {
        let cycle = job.cycle_mins;
        let window = self.calendar.slots() as usize;

        for slot in self.calendar.slots_from(from).take(window) {
            let pieces = want.min(self.free_pieces(machine, slot, cycle, ledger));
            if pieces == 0 {
                continue;
            }

            let free_start = ledger.used(&machine.id, slot);
            for operator in self.index.skilled_operators(slot.shift, job.process) {
                let start = phase_search(
                    ledger.events(&operator.id, slot),
                    free_start,
                    cycle,
                    pieces,
                    self.calendar,
                );
                if let Some(start_offset) = start {
                    return Some(Block {
                        slot,
                        start_offset,
                        pieces,
                        operator: Some(operator),
                    });
                }
            }
        }
        None
    }

    /// Unassigned block at the first open slot from `from`.
    ///
    /// Returns `None` when the machine has no room left in the horizon.
    pub fn fallback(
        &self,
        machine: &Machine,
        from: Slot,
        cycle: u32,
        remaining: u32,
        ledger: &ResourceLedger,
    ) -> Option<Block<'a>> {
        let slot = self.find_open_slot(machine, from, cycle, ledger)?;
        let pieces = self
            .free_pieces(machine, slot, cycle, ledger)
            .min(remaining / cycle);
        if pieces == 0 {
            return None;
        }
        Some(Block {
            slot,
            start_offset: ledger.used(&machine.id, slot),
            pieces,
            operator: None,
        })
    }
}

/// Finds the first phase that lets `pieces` events fit around `events`.
///
/// Events are generated at `free_start + phase + n * cycle` for
/// `phase` in `0..=walk_buffer`. A phase is accepted when every event ends
/// up inside the shift and at least `walk_buffer` minutes from each
/// committed event. Returns the first event offset.
///
/// A block of several pieces whose cycle is shorter than the walk buffer
/// collides with itself, so no phase fits it.
pub fn phase_search(
    events: Option<&BTreeSet<u32>>,
    free_start: u32,
    cycle: u32,
    pieces: u32,
    calendar: &ShiftCalendar,
) -> Option<u32> {
    let buffer = calendar.walk_buffer;
    if pieces > 1 && cycle < buffer {
        return None;
    }
    (0..=buffer)
        .map(|phase| free_start.saturating_add(phase))
        .find(|&start| {
            (0..pieces).all(|n| {
                let t = start.saturating_add(n.saturating_mul(cycle));
                t < calendar.shift_minutes && !events.is_some_and(|ev| collides(ev, t, buffer))
            })
        })
}

/// Whether `t` lies strictly within `buffer` minutes of any committed event.
fn collides(events: &BTreeSet<u32>, t: u32, buffer: u32) -> bool {
    if buffer == 0 {
        return false;
    }
    let lo = (t + 1).saturating_sub(buffer);
    events.range(lo..t.saturating_add(buffer)).next().is_some()
}
