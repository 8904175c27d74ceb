use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::DateWindow;
use crate::error::{ChartError, ChartResult};

/// Names of the custom ticket fields effort metrics are read from.
///
/// These are per-request configuration, not process-wide state: different
/// charts on the same page may track different fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortFields {
    #[serde(default = "default_estimation_field")]
    pub estimation: String,
    #[serde(default = "default_remaining_field")]
    pub remaining: String,
    #[serde(default = "default_spent_field")]
    pub spent: String,
}

impl Default for EffortFields {
    fn default() -> Self {
        Self {
            estimation: default_estimation_field(),
            remaining: default_remaining_field(),
            spent: default_spent_field(),
        }
    }
}

fn default_estimation_field() -> String {
    "estimatedhours".to_owned()
}

fn default_remaining_field() -> String {
    "remaininghours".to_owned()
}

fn default_spent_field() -> String {
    "totalhours".to_owned()
}

/// Burndown chart options.
///
/// Serializable so hosts can accept the whole option set as JSON instead of
/// inventing an ad-hoc format. Every field except `start_date` has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurndownOptions {
    /// Mandatory first day of the charted period.
    pub start_date: Option<NaiveDate>,
    /// Last day of the charted period; defaults to "today" when omitted.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_color_spent")]
    pub color_spent: String,
    #[serde(default = "default_color_expected")]
    pub color_expected: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_weekend_color")]
    pub weekend_color: String,
    /// Include weekend days in the chart.
    #[serde(default = "default_true")]
    pub weekends: bool,
    /// Draw the spent-effort series.
    #[serde(default = "default_true")]
    pub spent: bool,
    /// Initial expected hours for the linear reference line; zero hides it.
    #[serde(default)]
    pub expected: Decimal,
    /// Hour step between gridlines; zero draws only the chart bounding box.
    #[serde(default)]
    pub gridlines: Decimal,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for BurndownOptions {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            width: default_width(),
            height: default_height(),
            color: default_color(),
            color_spent: default_color_spent(),
            color_expected: default_color_expected(),
            bg_color: default_bg_color(),
            weekend_color: default_weekend_color(),
            weekends: true,
            spent: true,
            expected: Decimal::ZERO,
            gridlines: Decimal::ZERO,
            title: None,
        }
    }
}

impl BurndownOptions {
    pub fn from_json(raw: &str) -> ChartResult<Self> {
        serde_json::from_str(raw).map_err(|err| ChartError::InvalidConfig(err.to_string()))
    }

    /// Resolves the charted window, defaulting a missing end date to `today`.
    pub fn window(&self, today: NaiveDate) -> ChartResult<DateWindow> {
        let start = self.start_date.ok_or(ChartError::MissingStartDate)?;
        Ok(DateWindow::new(start, self.end_date.unwrap_or(today)))
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    200
}

fn default_color() -> String {
    "ff9900".to_owned()
}

fn default_color_spent() -> String {
    "40af30".to_owned()
}

fn default_color_expected() -> String {
    "ffddaa".to_owned()
}

fn default_bg_color() -> String {
    "ffffff00".to_owned()
}

fn default_weekend_color() -> String {
    "ccccccaa".to_owned()
}

fn default_true() -> bool {
    true
}

/// Workload pie-chart options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadOptions {
    #[serde(default = "default_workload_width")]
    pub width: u32,
    #[serde(default = "default_workload_height")]
    pub height: u32,
    #[serde(default = "default_color")]
    pub color: String,
    /// Unit suffix shown after effort numbers in labels.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// End of the working period, used for the "workdays left" title.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Default for WorkloadOptions {
    fn default() -> Self {
        Self {
            width: default_workload_width(),
            height: default_workload_height(),
            color: default_color(),
            suffix: default_suffix(),
            end_date: None,
        }
    }
}

fn default_workload_width() -> u32 {
    400
}

fn default_workload_height() -> u32 {
    100
}

fn default_suffix() -> String {
    "h".to_owned()
}
