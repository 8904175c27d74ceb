use burndown_rs::core::{scale_series, DateWindow, Timetable};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn flat_timetable(window: DateWindow, value: i64) -> Timetable {
    let mut timetable = Timetable::seeded(window);
    for day in window.days() {
        timetable.add(day, Decimal::from(value));
    }
    timetable
}

#[test]
fn all_equal_values_scale_to_one_hundred_percent() {
    let window = DateWindow::new(date(2008, 1, 1), date(2008, 1, 5));
    let timetable = flat_timetable(window, 8);

    let scaled = scale_series(&timetable, Decimal::ZERO, date(2008, 1, 5));

    assert_eq!(scaled.max_value, Decimal::from(8));
    assert_eq!(scaled.ydata, vec![Decimal::from(100); 5]);
    let expected_x: Vec<Decimal> = [0, 25, 50, 75, 100].iter().map(|v| Decimal::from(*v)).collect();
    assert_eq!(scaled.xdata, expected_x);
}

#[test]
fn uneven_spacing_rounds_half_up_to_two_decimals() {
    let window = DateWindow::new(date(2008, 1, 1), date(2008, 1, 7));
    let timetable = flat_timetable(window, 6);

    let scaled = scale_series(&timetable, Decimal::ZERO, date(2008, 1, 7));

    // 100 / 6 = 16.666..., rounded half-up.
    assert_eq!(scaled.xdata[1], "16.67".parse::<Decimal>().expect("decimal"));
    assert_eq!(scaled.xdata[6], Decimal::from(100));
}

#[test]
fn days_after_today_are_masked_with_sentinel() {
    let window = DateWindow::new(date(2008, 1, 1), date(2008, 1, 5));
    let timetable = flat_timetable(window, 8);

    let scaled = scale_series(&timetable, Decimal::ZERO, date(2008, 1, 2));

    assert_eq!(scaled.ydata[0], Decimal::from(100));
    assert_eq!(scaled.ydata[1], Decimal::from(100));
    assert_eq!(scaled.ydata[2], Decimal::NEGATIVE_ONE);
    assert_eq!(scaled.ydata[3], Decimal::NEGATIVE_ONE);
    assert_eq!(scaled.ydata[4], Decimal::NEGATIVE_ONE);
}

#[test]
fn non_positive_peak_falls_back_to_one_hundred() {
    let window = DateWindow::new(date(2008, 1, 1), date(2008, 1, 5));
    let timetable = Timetable::seeded(window);

    let scaled = scale_series(&timetable, Decimal::ZERO, date(2008, 1, 5));

    assert_eq!(scaled.max_value, Decimal::from(100));
    assert!(scaled.ydata.iter().all(|y| *y == Decimal::ZERO));
}

#[test]
fn expected_value_participates_in_the_peak() {
    let window = DateWindow::new(date(2008, 1, 1), date(2008, 1, 5));
    let timetable = flat_timetable(window, 8);

    let scaled = scale_series(&timetable, Decimal::from(16), date(2008, 1, 5));

    assert_eq!(scaled.max_value, Decimal::from(16));
    assert!(scaled.ydata.iter().all(|y| *y == Decimal::from(50)));
}

#[test]
fn single_remaining_day_sits_at_x_zero() {
    // A Friday-Saturday window loses its Saturday to weekend stripping,
    // leaving one point.
    let window = DateWindow::new(date(2008, 1, 4), date(2008, 1, 5));
    let mut timetable = flat_timetable(window, 8);
    timetable.strip_weekends();
    assert_eq!(timetable.len(), 1);

    let scaled = scale_series(&timetable, Decimal::ZERO, date(2008, 1, 5));

    assert_eq!(scaled.xdata, vec![Decimal::ZERO]);
    assert_eq!(scaled.ydata, vec![Decimal::from(100)]);
}

#[test]
fn empty_timetable_scales_to_empty_series() {
    let timetable = Timetable::default();

    let scaled = scale_series(&timetable, Decimal::ZERO, date(2008, 1, 5));

    assert!(scaled.xdata.is_empty());
    assert!(scaled.ydata.is_empty());
    assert_eq!(scaled.max_value, Decimal::from(100));
}
