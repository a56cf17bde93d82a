//! Calendar arithmetic shared by the ledgers.
//!
//! Weeks start on Monday (ISO convention) everywhere in this crate, and
//! every function takes its reference date explicitly so derivations stay
//! deterministic under test.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// Parse a `HH:MM` 24-hour wall-clock string into minutes since midnight.
pub fn clock_minutes(s: &str) -> Option<i64> {
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some((t.hour() * 60 + t.minute()) as i64)
}

/// Minutes from `start` to `end`, both `HH:MM` strings on the same day.
///
/// Zero or negative when `end` is not after `start`; `None` when either
/// string fails to parse.
pub fn minutes_between(start: &str, end: &str) -> Option<i64> {
    Some(clock_minutes(end)? - clock_minutes(start)?)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The `count` days ending at `last`, oldest first.
pub fn trailing_days(last: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .map(|i| last - Duration::days(i as i64))
        .collect()
}

/// Whether two dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
