use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range a chart is computed over.
///
/// Construction clamps the range to a minimum of one day, so downstream
/// date arithmetic never sees an empty or inverted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Creates a window; an end on or before the start is pushed out to
    /// `start + 1 day`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let end = if end <= start {
            start.succ_opt().unwrap_or(start)
        } else {
            end
        };
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days in the window, both endpoints included.
    #[must_use]
    pub fn day_count(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every date in the window in ascending order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}
