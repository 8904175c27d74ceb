use rust_decimal::Decimal;

use crate::api::options::EffortFields;
use crate::api::provider::{TicketFilter, TicketStore};
use crate::core::{round_half_up, TicketSnapshot};
use crate::error::ChartResult;

/// Sums a numeric field over current ticket snapshots.
///
/// Missing or unparseable values contribute nothing; this is plain snapshot
/// bookkeeping, not history reconstruction.
#[must_use]
pub fn sum_field(tickets: &[TicketSnapshot], field: &str) -> Decimal {
    tickets
        .iter()
        .filter_map(|ticket| ticket.field(field))
        .filter_map(|value| value.trim().parse::<Decimal>().ok())
        .sum()
}

/// Total estimated effort over the tickets matching `filter`.
pub fn hours_estimated<S: TicketStore>(
    store: &S,
    filter: &TicketFilter,
    fields: &EffortFields,
) -> ChartResult<Decimal> {
    let tickets = store.query_tickets(filter, &fields.estimation)?;
    Ok(round_half_up(sum_field(&tickets, &fields.estimation), 2))
}

/// Total spent effort over the tickets matching `filter`.
pub fn hours_spent<S: TicketStore>(
    store: &S,
    filter: &TicketFilter,
    fields: &EffortFields,
) -> ChartResult<Decimal> {
    let tickets = store.query_tickets(filter, &fields.spent)?;
    Ok(round_half_up(sum_field(&tickets, &fields.spent), 2))
}

/// Formats an hour total without trailing zeros ("8", "8.5").
#[must_use]
pub fn format_hours(total: Decimal) -> String {
    round_half_up(total, 2).normalize().to_string()
}
