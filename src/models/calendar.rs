//! Shift calendar and slot models.
//!
//! The planning horizon is a run of days, each split into a day shift and a
//! night shift of equal length. A [`Slot`] names one (day, shift) pair;
//! slots are walked in the fixed order day → night → next day's day.
//!
//! # Time Model
//! Offsets inside a slot are whole minutes from the start of the shift.
//! Day indices start at 0 (Monday).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Day shift (walked first).
    Day,
    /// Night shift.
    Night,
}

impl Shift {
    /// Both shifts in walk order.
    pub const ALL: [Shift; 2] = [Shift::Day, Shift::Night];
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Day => f.write_str("day"),
            Shift::Night => f.write_str("night"),
        }
    }
}

/// One (day, shift) pair of the horizon.
///
/// Ordered by day, then shift, which is also the walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day index (0 = Monday).
    pub day: u32,
    /// Shift within the day.
    pub shift: Shift,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: u32, shift: Shift) -> Self {
        Self { day, shift }
    }

    /// First slot of the horizon: day 0, day shift.
    pub fn first() -> Self {
        Self::new(0, Shift::Day)
    }

    /// The slot that follows this one.
    pub fn next(self) -> Self {
        match self.shift {
            Shift::Day => Self::new(self.day, Shift::Night),
            Shift::Night => Self::new(self.day + 1, Shift::Day),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}/{}", self.day, self.shift)
    }
}

/// Calendar configuration errors.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("calendar must span at least one day")]
    NoDays,

    #[error("shift length must be positive")]
    EmptyShift,

    #[error("walk buffer {buffer} min does not fit in a {shift} min shift")]
    BufferTooLarge { buffer: u32, shift: u32 },

    #[error("invalid calendar JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Planning horizon and per-shift constants.
///
/// Defaults to a 7-day week of 480-minute shifts with a 2-minute walk
/// buffer between events of the same employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftCalendar {
    /// Number of days in the horizon.
    pub days: u32,
    /// Length of each shift (minutes).
    pub shift_minutes: u32,
    /// Minimum gap between two events of one employee in one shift (minutes).
    pub walk_buffer: u32,
}

impl Default for ShiftCalendar {
    fn default() -> Self {
        Self {
            days: 7,
            shift_minutes: 8 * 60,
            walk_buffer: 2,
        }
    }
}

impl ShiftCalendar {
    /// Creates the default weekly calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a calendar from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let calendar: Self = serde_json::from_str(json)?;
        calendar.validate()?;
        Ok(calendar)
    }

    /// Sets the number of days.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets the shift length.
    pub fn with_shift_minutes(mut self, minutes: u32) -> Self {
        self.shift_minutes = minutes;
        self
    }

    /// Sets the walk buffer.
    pub fn with_walk_buffer(mut self, minutes: u32) -> Self {
        self.walk_buffer = minutes;
        self
    }

    /// Checks that the calendar describes a usable horizon.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.days == 0 {
            return Err(CalendarError::NoDays);
        }
        if self.shift_minutes == 0 {
            return Err(CalendarError::EmptyShift);
        }
        if self.walk_buffer >= self.shift_minutes {
            return Err(CalendarError::BufferTooLarge {
                buffer: self.walk_buffer,
                shift: self.shift_minutes,
            });
        }
        Ok(())
    }

    /// Number of slots in the horizon (two per day).
    #[inline]
    pub fn slots(&self) -> u32 {
        self.days.saturating_mul(2)
    }

    /// Whether a slot lies inside the horizon.
    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        slot.day < self.days
    }

    /// Slots from `from` (inclusive) to the end of the horizon, in walk order.
    pub fn slots_from(&self, from: Slot) -> impl Iterator<Item = Slot> + '_ {
        std::iter::successors(Some(from), |s| Some(s.next())).take_while(|s| self.contains(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_walk_order() {
        let s = Slot::first();
        assert_eq!(s.next(), Slot::new(0, Shift::Night));
        assert_eq!(s.next().next(), Slot::new(1, Shift::Day));
        assert!(Slot::new(0, Shift::Night) < Slot::new(1, Shift::Day));
        assert!(Slot::new(2, Shift::Day) < Slot::new(2, Shift::Night));
    }

    #[test]
    fn test_default_calendar() {
        let cal = ShiftCalendar::default();
        assert_eq!(cal.days, 7);
        assert_eq!(cal.shift_minutes, 480);
        assert_eq!(cal.walk_buffer, 2);
        assert_eq!(cal.slots(), 14);
        assert!(cal.validate().is_ok());
    }

    #[test]
    fn test_slots_from_stops_at_horizon() {
        let cal = ShiftCalendar::new().with_days(2);
        let all: Vec<Slot> = cal.slots_from(Slot::first()).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3], Slot::new(1, Shift::Night));

        let tail: Vec<Slot> = cal.slots_from(Slot::new(1, Shift::Night)).collect();
        assert_eq!(tail, vec![Slot::new(1, Shift::Night)]);

        assert_eq!(cal.slots_from(Slot::new(2, Shift::Day)).count(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            ShiftCalendar::new().with_days(0).validate(),
            Err(CalendarError::NoDays)
        ));
        assert!(matches!(
            ShiftCalendar::new().with_shift_minutes(0).validate(),
            Err(CalendarError::EmptyShift)
        ));
        assert!(matches!(
            ShiftCalendar::new()
                .with_shift_minutes(10)
                .with_walk_buffer(10)
                .validate(),
            Err(CalendarError::BufferTooLarge { buffer: 10, shift: 10 })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let cal = ShiftCalendar::from_json(r#"{"days": 5}"#).unwrap();
        assert_eq!(cal.days, 5);
        assert_eq!(cal.shift_minutes, 480);

        assert!(matches!(
            ShiftCalendar::from_json(r#"{"days": 0}"#),
            Err(CalendarError::NoDays)
        ));
        assert!(matches!(
            ShiftCalendar::from_json("not json"),
            Err(CalendarError::Parse(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Slot::new(3, Shift::Night).to_string(), "d3/night");
    }
}
