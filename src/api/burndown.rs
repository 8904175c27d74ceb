use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use crate::api::aggregator::TimetableAggregator;
use crate::api::chart_params::{to_query_string, ChartParamBuilder, CHART_API_BASE};
use crate::api::options::{BurndownOptions, EffortFields};
use crate::api::provider::{TicketFilter, TicketStore};
use crate::core::scale_series;
use crate::error::ChartResult;

/// One-shot burndown chart computation over a ticket store.
///
/// Wires the full data flow: pull snapshots and change logs, reconstruct and
/// aggregate both effort series, scale them to percentages, and emit the
/// chart-API parameter map. Each call is independent; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct BurndownChart<'a, S: TicketStore> {
    store: &'a S,
    fields: &'a EffortFields,
}

impl<'a, S: TicketStore> BurndownChart<'a, S> {
    #[must_use]
    pub fn new(store: &'a S, fields: &'a EffortFields) -> Self {
        Self { store, fields }
    }

    /// Computes the chart parameters for one request.
    ///
    /// `today` is passed explicitly so future days can be masked and a
    /// missing end date resolved without the core reading a clock.
    pub fn chart_params(
        &self,
        filter: &TicketFilter,
        options: &BurndownOptions,
        today: NaiveDate,
    ) -> ChartResult<IndexMap<String, String>> {
        let window = options.window(today)?;

        let aggregator = TimetableAggregator::new(self.store, self.fields);
        let (remaining, spent) =
            aggregator.burndown_timetables(filter, window, options.weekends)?;

        let remaining_scaled = scale_series(&remaining, options.expected, today);
        let spent_scaled = scale_series(&spent, options.expected, today);

        let dates: Vec<NaiveDate> = remaining.dates().collect();
        let title = resolve_title(options, filter);

        let params = ChartParamBuilder::new(options).burndown_params(
            &dates,
            &remaining_scaled,
            &spent_scaled,
            &title,
        );
        debug!(
            days = dates.len(),
            max_value = %remaining_scaled.max_value,
            "built burndown chart parameters"
        );

        Ok(params)
    }

    /// Computes the complete chart-image URL for one request.
    pub fn chart_url(
        &self,
        filter: &TicketFilter,
        options: &BurndownOptions,
        today: NaiveDate,
    ) -> ChartResult<String> {
        let params = self.chart_params(filter, options, today)?;
        Ok(format!("{CHART_API_BASE}?{}", to_query_string(&params)))
    }
}

/// Explicit title, else the first milestone from the filter, else a generic
/// fallback.
fn resolve_title(options: &BurndownOptions, filter: &TicketFilter) -> String {
    if let Some(title) = &options.title {
        return title.clone();
    }
    if let Some(milestone) = filter.get("milestone") {
        if let Some(first) = milestone.split('|').next() {
            if !first.is_empty() {
                return first.to_owned();
            }
        }
    }
    "Burndown Chart".to_owned()
}
