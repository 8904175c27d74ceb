use chrono::{Datelike, NaiveDate, Weekday};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::api::chart_params::to_query_string;
use crate::api::options::{EffortFields, WorkloadOptions};
use crate::api::provider::{TicketFilter, TicketStore};
use crate::core::round_half_up;
use crate::error::ChartResult;

use crate::api::chart_params::CHART_API_BASE;

/// Builds pie-chart parameters showing remaining effort per ticket owner.
///
/// Closed tickets and tickets without a parseable remaining value are
/// excluded. When an end date is configured, the title also reports the
/// total and the number of weekdays left until then.
pub fn workload_params<S: TicketStore>(
    store: &S,
    filter: &TicketFilter,
    options: &WorkloadOptions,
    fields: &EffortFields,
    today: NaiveDate,
) -> ChartResult<IndexMap<String, String>> {
    let tickets = store.query_tickets(filter, &fields.remaining)?;
    let closed_states = store.closed_states();

    let mut total = Decimal::ZERO;
    let mut estimations: IndexMap<String, Decimal> = IndexMap::new();

    for ticket in &tickets {
        if closed_states.contains(&ticket.status) {
            continue;
        }
        let Some(estimation) = ticket
            .field(&fields.remaining)
            .and_then(|value| value.trim().parse::<Decimal>().ok())
        else {
            continue;
        };
        let owner = ticket.field("owner").unwrap_or("").to_owned();
        total += estimation;
        *estimations.entry(owner).or_insert(Decimal::ZERO) += estimation;
    }
    debug!(
        owners = estimations.len(),
        total = %total,
        "aggregated per-owner workload"
    );

    let mut data = Vec::with_capacity(estimations.len());
    let mut labels = Vec::with_capacity(estimations.len());
    for (owner, estimation) in &estimations {
        // Owners may be email addresses; the chart API is queried over a
        // third-party service, so the domain part is not sent along.
        labels.push(format!(
            "{} {}{}",
            obfuscate_owner(owner),
            round_half_up(*estimation, 2).normalize(),
            options.suffix
        ));
        data.push(estimation.trunc().to_string());
    }

    let mut title = "Workload".to_owned();
    if let Some(end_date) = options.end_date {
        let days_remaining = count_workdays(today, end_date);
        title.push_str(&format!(
            " {}{} (~{} workdays left)",
            round_half_up(total, 2).normalize(),
            options.suffix,
            days_remaining
        ));
    }

    let mut params = IndexMap::new();
    params.insert(
        "chs".to_owned(),
        format!("{}x{}", options.width, options.height),
    );
    params.insert("chf".to_owned(), "bg,s,00000000".to_owned());
    params.insert("chd".to_owned(), format!("t:{}", data.join(",")));
    params.insert("cht".to_owned(), "p3".to_owned());
    params.insert("chtt".to_owned(), title);
    params.insert("chl".to_owned(), labels.join("|"));
    params.insert("chco".to_owned(), options.color.clone());

    Ok(params)
}

/// Complete chart-image URL for the workload pie chart.
pub fn workload_url<S: TicketStore>(
    store: &S,
    filter: &TicketFilter,
    options: &WorkloadOptions,
    fields: &EffortFields,
    today: NaiveDate,
) -> ChartResult<String> {
    let params = workload_params(store, filter, options, fields, today)?;
    Ok(format!("{CHART_API_BASE}?{}", to_query_string(&params)))
}

/// Weekdays between `from` and `to`, both inclusive.
fn count_workdays(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut days = 0;
    let mut current = from;
    while current <= to {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days += 1;
        }
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }
    days
}

/// Keeps the local part of an email-like owner, drops the domain.
fn obfuscate_owner(owner: &str) -> String {
    match owner.split_once('@') {
        Some((local, _)) => format!("{local}@\u{2026}"),
        None => owner.to_owned(),
    }
}
