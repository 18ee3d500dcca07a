use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use glyco_core::models::Granularity;

/// The `[start, end)` period of `granularity` that contains `timestamp`.
///
/// Weeks are ISO weeks (Monday 00:00). Months run from the 1st to the 1st.
pub fn period_bounds(timestamp: DateTime<Utc>, granularity: Granularity) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = timestamp.date_naive();
    let (start, end) = match granularity {
        Granularity::Day => (date, shift(date, 1)),
        Granularity::Week => {
            let monday = shift(date, -i64::from(date.weekday().num_days_from_monday()));
            (monday, shift(monday, 7))
        }
        Granularity::Month => {
            let first = first_of_month(date);
            // Day 33 counted from the 1st always lands in the next month.
            (first, first_of_month(shift(first, 32)))
        }
    };
    (midnight(start), midnight(end))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    shift(date, -i64::from(date.day0()))
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
