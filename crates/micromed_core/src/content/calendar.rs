//! Calendar month listing for the notes calendar screen.

use serde::{Deserialize, Serialize};

/// The calendar always lists this many days, whatever the month length.
pub const CALENDAR_DAYS: u32 = 30;

/// Month whose dates the calendar screen lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self {
            year: 2025,
            month: 7,
        }
    }
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Formats one day of this month as a `YYYY-MM-DD` note key.
    pub fn date_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    /// Returns date keys for days `1..=30` in order.
    pub fn dates(&self) -> Vec<String> {
        (1..=CALENDAR_DAYS).map(|day| self.date_key(day)).collect()
    }
}
