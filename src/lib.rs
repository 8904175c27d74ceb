//! burndown-rs: effort burndown analytics for issue-tracker tickets.
//!
//! The crate reconstructs per-day effort values from ticket change history,
//! aggregates them into window-wide timetables, and renders the result as
//! URL-ready chart-API parameters. Ticket access goes through the
//! [`api::TicketStore`] trait so any tracker backend can plug in.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BurndownChart, BurndownOptions, EffortFields, TicketFilter, TicketStore};
pub use error::{ChartError, ChartResult};
