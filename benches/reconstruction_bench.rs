use std::collections::HashSet;
use std::hint::black_box;

use burndown_rs::core::{
    scale_series, ChangeRecord, DateWindow, HistoryReconstructor, TicketSnapshot, Timetable,
};
use chrono::{Days, NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use rust_decimal::Decimal;

const FIELD: &str = "remaininghours";

fn bench_daily_series_one_year(c: &mut Criterion) {
    let created = Utc
        .with_ymd_and_hms(2008, 1, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");

    let mut fields = IndexMap::new();
    fields.insert(FIELD.to_owned(), "40".to_owned());
    let ticket = TicketSnapshot {
        id: 1,
        created,
        status: "open".to_owned(),
        fields,
    };

    // One estimate change per week over a year.
    let log: Vec<ChangeRecord> = (0..52u64)
        .map(|week| ChangeRecord {
            field: FIELD.to_owned(),
            at: created + chrono::Duration::days((week * 7) as i64),
            old_value: Some((52 - week).to_string()),
            new_value: Some((51 - week).to_string()),
        })
        .collect();

    let closed: HashSet<String> = ["closed".to_owned()].into_iter().collect();
    let reconstructor = HistoryReconstructor::new(FIELD, &closed);
    let start = NaiveDate::from_ymd_opt(2008, 1, 1).expect("valid date");
    let end = start
        .checked_add_days(Days::new(364))
        .expect("valid end date");
    let window = DateWindow::new(start, end);

    c.bench_function("daily_series_one_year", |b| {
        b.iter(|| {
            let samples =
                reconstructor.daily_series(black_box(&ticket), black_box(&log), black_box(window));
            black_box(samples)
        })
    });
}

fn bench_scale_series_one_year(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2008, 1, 1).expect("valid date");
    let end = start
        .checked_add_days(Days::new(364))
        .expect("valid end date");
    let window = DateWindow::new(start, end);

    let mut timetable = Timetable::seeded(window);
    for (index, day) in window.days().enumerate() {
        timetable.add(day, Decimal::from((index % 40) as u64));
    }

    c.bench_function("scale_series_one_year", |b| {
        b.iter(|| {
            let scaled = scale_series(black_box(&timetable), Decimal::ZERO, window.end());
            black_box(scaled)
        })
    });
}

criterion_group!(
    benches,
    bench_daily_series_one_year,
    bench_scale_series_one_year
);
criterion_main!(benches);
