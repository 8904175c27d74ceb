use chrono::{Datelike, NaiveDate, Weekday};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::api::options::BurndownOptions;
use crate::core::{round_half_up, ScaledSeries};

/// Chart-image API endpoint the produced parameters target.
pub const CHART_API_BASE: &str = "https://image-charts.com/chart";

/// Assembles the query parameters of the external chart-image API.
///
/// Output is an insertion-ordered map of URL-ready string values in the
/// Google Chart API dialect: `chd` carries pipe-separated x|y coordinate
/// lists per series, `chm` carries weekend shading rectangles, `chxl` the
/// day-of-month ticks plus month/year range labels.
#[derive(Debug, Clone, Copy)]
pub struct ChartParamBuilder<'a> {
    options: &'a BurndownOptions,
}

impl<'a> ChartParamBuilder<'a> {
    #[must_use]
    pub fn new(options: &'a BurndownOptions) -> Self {
        Self { options }
    }

    /// Builds the full parameter set for a burndown line chart.
    ///
    /// `dates` must be the (weekend-stripped) dates backing both scaled
    /// series, in ascending order.
    #[must_use]
    pub fn burndown_params(
        &self,
        dates: &[NaiveDate],
        remaining: &ScaledSeries,
        spent: &ScaledSeries,
        title: &str,
    ) -> IndexMap<String, String> {
        let options = self.options;
        let mut params = IndexMap::new();

        params.insert(
            "chs".to_owned(),
            format!("{}x{}", options.width, options.height),
        );
        params.insert(
            "chf".to_owned(),
            format!("c,s,{}|bg,s,00000000", options.bg_color),
        );

        // A hidden spent series still occupies a chd slot so the series
        // colors and legend keep their positions.
        let spent_data = if options.spent {
            format!(
                "|{}|{}",
                join_coords(&spent.xdata),
                join_coords(&spent.ydata)
            )
        } else {
            "|0,0|0,0".to_owned()
        };

        let expected_data = if options.expected == Decimal::ZERO {
            String::new()
        } else {
            let peak = round_half_up(
                options.expected * Decimal::ONE_HUNDRED / remaining.max_value,
                2,
            );
            format!("|0,100|{},0", fmt_coord(peak))
        };

        params.insert(
            "chd".to_owned(),
            format!(
                "t:{}|{}{}{}",
                join_coords(&remaining.xdata),
                join_coords(&remaining.ydata),
                spent_data,
                expected_data
            ),
        );
        params.insert("cht".to_owned(), "lxy".to_owned());
        params.insert("chxt".to_owned(), "x,x,y".to_owned());
        params.insert("chxl".to_owned(), bottom_axis(dates));
        params.insert("chxr".to_owned(), format!("2,0,{}", remaining.max_value));
        params.insert(
            "chm".to_owned(),
            weekend_bands(dates, &remaining.xdata, &options.weekend_color).join("|"),
        );
        params.insert("chg".to_owned(), self.gridlines(remaining));
        params.insert(
            "chco".to_owned(),
            format!(
                "{},{},{}",
                options.color, options.color_spent, options.color_expected
            ),
        );
        params.insert("chdl".to_owned(), "Remaining|Spent|Estimated".to_owned());
        params.insert("chtt".to_owned(), title.to_owned());

        params
    }

    fn gridlines(&self, remaining: &ScaledSeries) -> String {
        // The zero-step default draws only the top and right bounding lines.
        // A single-day series has no x step to derive gridlines from, so it
        // gets the same bounding box.
        if self.options.gridlines == Decimal::ZERO || remaining.xdata.len() < 2 {
            return "100.0,100.0,1,0".to_owned();
        }

        let step = round_half_up(
            self.options.gridlines * Decimal::ONE_HUNDRED / remaining.max_value,
            4,
        );
        format!("{},{}", fmt_coord(remaining.xdata[1]), step.normalize())
    }
}

/// Formats a scaled coordinate for a chd data string.
///
/// The masking sentinel stays a bare `-1`; everything else is emitted with
/// two decimals.
fn fmt_coord(value: Decimal) -> String {
    if value == Decimal::NEGATIVE_ONE {
        "-1".to_owned()
    } else {
        format!("{value:.2}")
    }
}

fn join_coords(coords: &[Decimal]) -> String {
    coords
        .iter()
        .map(|value| fmt_coord(*value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Day-of-month tick labels plus a month/year range label at each end.
fn bottom_axis(dates: &[NaiveDate]) -> String {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return "0:".to_owned();
    };

    let days = dates
        .iter()
        .map(|date| date.day().to_string())
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "0:|{days}|1:|{}/{}|{}/{}",
        first.month(),
        first.year(),
        last.month(),
        last.year()
    )
}

/// Shading rectangles covering each weekend at its scaled x position.
///
/// Each band runs from the midpoint before Saturday to the midpoint after
/// Sunday, in 0..1 units of the x axis. Weekends cut off by the window edge
/// (a leading Sunday or trailing Saturday) get a half band clamped to the
/// edge.
fn weekend_bands(dates: &[NaiveDate], xdata: &[Decimal], color: &str) -> Vec<String> {
    let mut bands = Vec::new();
    if dates.len() < 2 || dates.len() != xdata.len() {
        return bands;
    }

    let halfday = round_half_up(
        Decimal::new(5, 1) / Decimal::from((dates.len() - 1) as u64),
        2,
    );

    let mut saturday: Option<usize> = None;
    for (index, date) in dates.iter().enumerate() {
        match date.weekday() {
            Weekday::Sat => saturday = Some(index),
            Weekday::Sun => {
                if let Some(sat) = saturday.take() {
                    let x0 = round_half_up(xdata[sat] / Decimal::ONE_HUNDRED - halfday, 2)
                        .max(Decimal::ZERO);
                    let x1 = round_half_up(xdata[index] / Decimal::ONE_HUNDRED + halfday, 2)
                        .min(Decimal::ONE);
                    bands.push(format!("R,{color},0,{x0},{x1}"));
                }
            }
            _ => {}
        }
    }

    if dates.first().map(|date| date.weekday()) == Some(Weekday::Sun) {
        bands.push(format!("R,{color},0,0.0,{halfday}"));
    }
    if dates.last().map(|date| date.weekday()) == Some(Weekday::Sat) {
        bands.push(format!("R,{color},0,{},1.0", Decimal::ONE - halfday));
    }

    bands
}

/// Renders a parameter map as a percent-encoded query string.
#[must_use]
pub fn to_query_string(params: &IndexMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn percent_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
