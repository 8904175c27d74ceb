use std::collections::HashSet;

use indexmap::IndexMap;

use crate::core::{ChangeRecord, TicketId, TicketSnapshot};
use crate::error::ChartResult;

/// Key=value criteria a ticket query must match, in the tracker's own query
/// language (`milestone=Sprint 1`, `component=core`, ...).
pub type TicketFilter = IndexMap<String, String>;

/// Backend seam to the ticket tracker.
///
/// The chart computation treats these as blocking calls returning complete
/// in-memory results; retry, caching, and cancellation belong to the host.
pub trait TicketStore {
    /// Returns current snapshots of the tickets matching `filter`.
    ///
    /// Implementations must include `required_field` in each snapshot's field
    /// map and only return tickets where it is present and non-empty.
    fn query_tickets(
        &self,
        filter: &TicketFilter,
        required_field: &str,
    ) -> ChartResult<Vec<TicketSnapshot>>;

    /// Returns the ticket's change log filtered to `tracked_field` and
    /// "status", ascending by timestamp.
    fn change_log(&self, ticket: TicketId, tracked_field: &str) -> ChartResult<Vec<ChangeRecord>>;

    /// Status values in which a ticket counts as closed.
    fn closed_states(&self) -> &HashSet<String>;
}
