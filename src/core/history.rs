use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::estimate::cast_estimate;
use crate::core::ticket::{ChangeRecord, TicketSnapshot, STATUS_FIELD};
use crate::core::window::DateWindow;

/// Reconstructed state of one ticket on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySample {
    pub date: NaiveDate,
    pub estimate: Decimal,
    pub open: bool,
}

/// Rebuilds the day-by-day value of a tracked numeric field and the ticket's
/// open/closed state from its change log.
///
/// The log only records the days something changed, so the reconstruction
/// forward-fills: the last value that became effective on or before a day is
/// the value in effect that day. Days before the first recorded change use
/// the earliest old value seen in the log, falling back to the current
/// snapshot when the field was never changed at all.
#[derive(Debug, Clone, Copy)]
pub struct HistoryReconstructor<'a> {
    tracked_field: &'a str,
    closed_states: &'a HashSet<String>,
}

impl<'a> HistoryReconstructor<'a> {
    #[must_use]
    pub fn new(tracked_field: &'a str, closed_states: &'a HashSet<String>) -> Self {
        Self {
            tracked_field,
            closed_states,
        }
    }

    /// Returns one sample per window day the ticket existed for, in ascending
    /// date order.
    ///
    /// The walk starts at the ticket's creation date rather than the window
    /// start, since changes between creation and window start still determine
    /// the state carried into the window. A ticket created after the window
    /// end yields no samples.
    #[must_use]
    pub fn daily_series(
        &self,
        ticket: &TicketSnapshot,
        log: &[ChangeRecord],
        window: DateWindow,
    ) -> Vec<DaySample> {
        let creation_date = ticket.created.date_naive();
        if creation_date > window.end() {
            return Vec::new();
        }

        let latest_estimate =
            cast_estimate(ticket.field(self.tracked_field)).unwrap_or(Decimal::ZERO);

        // Per-day maps of the value/status that became effective that day.
        // The log is ascending, so a later change on the same day naturally
        // overwrites an earlier one. Unparseable new values are skipped:
        // "unknown" must not clobber the carried value.
        let mut estimate_history: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        let mut status_history: BTreeMap<NaiveDate, String> = BTreeMap::new();
        let mut earliest_estimate: Option<Decimal> = None;
        let mut earliest_status: Option<&str> = None;

        for record in log {
            let event_date = record.at.date_naive();
            if record.field == self.tracked_field {
                if let Some(value) = cast_estimate(record.new_value.as_deref()) {
                    estimate_history.insert(event_date, value);
                }
                if earliest_estimate.is_none() {
                    earliest_estimate = cast_estimate(record.old_value.as_deref());
                }
            } else if record.field == STATUS_FIELD {
                status_history.insert(event_date, record.new_value.clone().unwrap_or_default());
                if earliest_status.is_none() {
                    earliest_status = record.old_value.as_deref();
                }
            }
        }

        // Seed day zero so forward-filling is defined from creation onward.
        estimate_history
            .entry(creation_date)
            .or_insert(earliest_estimate.unwrap_or(latest_estimate));
        status_history
            .entry(creation_date)
            .or_insert_with(|| earliest_status.unwrap_or(ticket.status.as_str()).to_owned());

        let mut samples = Vec::new();
        let mut estimate = Decimal::ZERO;
        let mut open = false;

        for date in creation_date
            .iter_days()
            .take_while(|date| *date <= window.end())
        {
            if let Some(status) = status_history.get(&date) {
                open = !self.closed_states.contains(status);
            }
            if let Some(value) = estimate_history.get(&date) {
                estimate = *value;
            }
            if date >= window.start() {
                samples.push(DaySample {
                    date,
                    estimate,
                    open,
                });
            }
        }

        samples
    }
}
