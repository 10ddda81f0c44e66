//! Date lookup and calendar arithmetic over the feed's `YYYY-M-D` strings.
//!
//! Lookups compare date strings literally. The feed never zero-pads month or
//! day, so callers holding a padded date (e.g. from a date picker) must run it
//! through [`unpad_date`] first. Series are assumed to be in chronological
//! order with one record per date; nothing here sorts or validates that.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::series::DailyRecord;

/// First date covered by the upstream feed.
pub const DATASET_EPOCH: &str = "2020-1-22";

pub const NOT_FOUND: i64 = -1;

/// Position of the first record whose date equals `date`.
pub fn index_of(series: &[DailyRecord], date: &str) -> Option<usize> {
    series.iter().position(|record| record.date == date)
}

/// `index_of` in the `-1`-for-missing convention.
pub fn index_of_or_sentinel(series: &[DailyRecord], date: &str) -> i64 {
    index_of(series, date)
        .and_then(|i| i64::try_from(i).ok())
        .unwrap_or(NOT_FOUND)
}

/// Date to position map built once per series. Agrees with [`index_of`],
/// including on duplicate dates where the earliest position is kept.
#[derive(Debug, Default)]
pub struct DateIndex {
    positions: HashMap<String, usize>,
}

impl DateIndex {
    pub fn new(series: &[DailyRecord]) -> DateIndex {
        let mut positions = HashMap::with_capacity(series.len());
        for (i, record) in series.iter().enumerate() {
            positions.entry(record.date.clone()).or_insert(i);
        }
        DateIndex { positions }
    }

    pub fn position(&self, date: &str) -> Option<usize> {
        self.positions.get(date).copied()
    }
}

fn split_numeric(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.trim().split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Parses padded or unpadded `YYYY-M-D` into a calendar date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let (year, month, day) = split_numeric(date)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Signed day count `date2 - date1`; 0 when either date does not parse.
pub fn days_between(date1: &str, date2: &str) -> i64 {
    match (parse_date(date1), parse_date(date2)) {
        (Some(a), Some(b)) => (b - a).num_days(),
        _ => 0,
    }
}

/// Calendar-correct offset, returned in unpadded form.
pub fn add_days(date: &str, days: i64) -> Option<String> {
    let start = parse_date(date)?;
    let shifted = start.checked_add_signed(Duration::try_days(days)?)?;
    Some(format_date(shifted))
}

/// `YYYY-M-D` to `YYYY-MM-DD`. Only reformats; the date is not validated.
pub fn pad_date(date: &str) -> Option<String> {
    let (year, month, day) = split_numeric(date)?;
    Some(format!("{year}-{month:02}-{day:02}"))
}

/// `YYYY-MM-DD` to `YYYY-M-D`, floored to [`DATASET_EPOCH`].
///
/// The floor applies when `year < 2020`, or when `month < 2 && day < 22`
/// regardless of year.
pub fn unpad_date(date: &str) -> Option<String> {
    let (year, month, day) = split_numeric(date)?;
    if year < 2020 || (month < 2 && day < 22) {
        return Some(DATASET_EPOCH.to_string());
    }
    Some(format!("{year}-{month}-{day}"))
}
