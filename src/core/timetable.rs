use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::core::window::DateWindow;

/// Accumulated effort totals keyed by calendar date.
///
/// Seeded with a zero entry for every day of the window before any ticket
/// contributes, so tickets with gaps can never leave missing days. Additions
/// outside the seeded range are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    entries: BTreeMap<NaiveDate, Decimal>,
}

impl Timetable {
    #[must_use]
    pub fn seeded(window: DateWindow) -> Self {
        Self {
            entries: window.days().map(|date| (date, Decimal::ZERO)).collect(),
        }
    }

    pub fn add(&mut self, date: NaiveDate, amount: Decimal) {
        if let Some(total) = self.entries.get_mut(&date) {
            *total += amount;
        }
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<Decimal> {
        self.entries.get(&date).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ascending dates currently present in the table.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    /// Ascending (date, total) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
        self.entries.iter().map(|(date, total)| (*date, *total))
    }

    /// Drops Saturdays and Sundays from the table.
    ///
    /// Callers holding parallel tables must strip them all so the series
    /// stay index-aligned.
    pub fn strip_weekends(&mut self) {
        self.entries
            .retain(|date, _| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
    }
}
