use tracing::{debug, warn};

use crate::api::options::EffortFields;
use crate::api::provider::{TicketFilter, TicketStore};
use crate::core::{DateWindow, HistoryReconstructor, Timetable};
use crate::error::ChartResult;

/// Sums reconstructed per-ticket daily effort into window-wide timetables.
///
/// One parameterized routine covers both series: the remaining-effort table
/// only counts days the ticket was open (remaining work drops to zero on
/// close), while the spent-effort table counts every day regardless of
/// status.
#[derive(Debug, Clone, Copy)]
pub struct TimetableAggregator<'a, S: TicketStore> {
    store: &'a S,
    fields: &'a EffortFields,
}

impl<'a, S: TicketStore> TimetableAggregator<'a, S> {
    #[must_use]
    pub fn new(store: &'a S, fields: &'a EffortFields) -> Self {
        Self { store, fields }
    }

    /// Builds the remaining and spent timetables for one chart request.
    ///
    /// With `include_weekends` off, Saturdays and Sundays are stripped from
    /// both tables in lockstep so the two series stay index-aligned.
    pub fn burndown_timetables(
        &self,
        filter: &TicketFilter,
        window: DateWindow,
        include_weekends: bool,
    ) -> ChartResult<(Timetable, Timetable)> {
        let mut remaining = self.calculate(filter, window, &self.fields.remaining, true)?;
        let mut spent = self.calculate(filter, window, &self.fields.spent, false)?;

        if !include_weekends {
            remaining.strip_weekends();
            spent.strip_weekends();
        }

        Ok((remaining, spent))
    }

    /// Aggregates one tracked field over the window.
    ///
    /// A ticket whose change log cannot be read is skipped with a warning;
    /// one bad ticket must not blank the whole chart.
    pub fn calculate(
        &self,
        filter: &TicketFilter,
        window: DateWindow,
        tracked_field: &str,
        open_only: bool,
    ) -> ChartResult<Timetable> {
        let mut timetable = Timetable::seeded(window);
        let tickets = self.store.query_tickets(filter, tracked_field)?;
        debug!(
            ticket_count = tickets.len(),
            tracked_field, open_only, "aggregating effort timetable"
        );

        let reconstructor = HistoryReconstructor::new(tracked_field, self.store.closed_states());

        for ticket in &tickets {
            let log = match self.store.change_log(ticket.id, tracked_field) {
                Ok(log) => log,
                Err(err) => {
                    warn!(ticket = ticket.id, %err, "skipping ticket with unreadable change log");
                    continue;
                }
            };

            for sample in reconstructor.daily_series(ticket, &log, window) {
                if sample.open || !open_only {
                    timetable.add(sample.date, sample.estimate);
                }
            }
        }

        Ok(timetable)
    }
}
