pub mod aggregator;
pub mod burndown;
pub mod chart_params;
pub mod options;
pub mod provider;
pub mod summary;
pub mod workload;

pub use aggregator::TimetableAggregator;
pub use burndown::BurndownChart;
pub use chart_params::{to_query_string, ChartParamBuilder, CHART_API_BASE};
pub use options::{BurndownOptions, EffortFields, WorkloadOptions};
pub use provider::{TicketFilter, TicketStore};
pub use summary::{format_hours, hours_estimated, hours_spent, sum_field};
pub use workload::{workload_params, workload_url};
