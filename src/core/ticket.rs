use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type TicketId = u64;

/// Field name under which trackers record status transitions.
pub const STATUS_FIELD: &str = "status";

/// Current state of a ticket as returned by the query backend.
///
/// `fields` holds the raw string values of any custom fields the query was
/// asked to include (effort estimates, owner, milestone). `IndexMap` is used
/// so field order from the backend survives serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSnapshot {
    pub id: TicketId,
    pub created: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub fields: IndexMap<String, String>,
}

impl TicketSnapshot {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// One row of a ticket's audit log, scoped to a single field.
///
/// Logs are consumed in ascending timestamp order. Old and new values are
/// optional because trackers record transitions from/to "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub field: String,
    pub at: DateTime<Utc>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}
