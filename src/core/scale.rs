use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::timetable::Timetable;

/// Half-up rounding used for all chart coordinate math.
#[must_use]
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// A timetable normalized to percentage coordinates for a 2D line chart.
///
/// `xdata` spaces the days evenly over 0..100 regardless of calendar gaps;
/// `ydata` is each day's total as a percentage of `max_value`. Days after
/// "today" carry the sentinel `-1`, which the chart API treats as "no point".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledSeries {
    pub xdata: Vec<Decimal>,
    pub ydata: Vec<Decimal>,
    pub max_value: Decimal,
}

/// Scales a timetable into percentage coordinates.
///
/// `expected` participates in the peak so a reference line drawn at the
/// expected initial effort fits on the chart. A non-positive peak falls back
/// to 100, keeping empty charts well-defined. A single-day table puts its
/// only point at x = 0.
#[must_use]
pub fn scale_series(timetable: &Timetable, expected: Decimal, today: NaiveDate) -> ScaledSeries {
    let mut max_value = expected;
    for (_, total) in timetable.iter() {
        if total > max_value {
            max_value = total;
        }
    }
    if max_value <= Decimal::ZERO {
        max_value = Decimal::ONE_HUNDRED;
    }

    let count = timetable.len();
    let mut xdata = Vec::with_capacity(count);
    let mut ydata = Vec::with_capacity(count);

    for (index, (date, total)) in timetable.iter().enumerate() {
        let x = if count > 1 {
            let span = Decimal::from((count - 1) as u64);
            round_half_up(Decimal::from(index as u64) * Decimal::ONE_HUNDRED / span, 2)
        } else {
            Decimal::ZERO
        };
        xdata.push(x);

        // Future days must not be plotted as if observed.
        let y = if date > today {
            Decimal::NEGATIVE_ONE
        } else {
            round_half_up(total * Decimal::ONE_HUNDRED / max_value, 2)
        };
        ydata.push(y);
    }

    ScaledSeries {
        xdata,
        ydata,
        max_value,
    }
}
