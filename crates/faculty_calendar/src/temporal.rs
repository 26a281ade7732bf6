//! Date normalization and the week/month grids shared by every view.
//!
//! Weeks run Sunday through Saturday. All dates produced here are plain
//! [`NaiveDate`]s (midnight in the caller's local wall clock).

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use tracing::warn;

/// Key used for records whose date could not be read.
pub const EPOCH_KEY: &str = "1970-01-01";

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTH_GRID_ROWS: usize = 6;
pub const MONTH_GRID_CELLS: usize = DAYS_PER_WEEK * MONTH_GRID_ROWS;

/// Anything that names a calendar day.
pub trait AsDate {
    fn as_date(&self) -> NaiveDate;
}

impl AsDate for NaiveDate {
    fn as_date(&self) -> NaiveDate {
        *self
    }
}

impl AsDate for NaiveDateTime {
    fn as_date(&self) -> NaiveDate {
        self.date()
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_current_month: bool,
}

/// Truncates `d` to midnight.
pub fn normalize(d: NaiveDateTime) -> NaiveDateTime {
    d.date().and_time(NaiveTime::MIN)
}

/// Truncates `d` to midnight, falling back to today's midnight when the
/// caller had no readable date.
pub fn normalize_or_today(d: Option<NaiveDateTime>, now: NaiveDateTime) -> NaiveDateTime {
    match d {
        Some(d) => normalize(d),
        None => {
            warn!("missing date, normalizing to today ({})", now.date());
            normalize(now)
        }
    }
}

/// Canonical `YYYY-MM-DD` key used for day equality.
pub fn date_key(d: impl AsDate) -> String {
    d.as_date().format("%Y-%m-%d").to_string()
}

/// Like [`date_key`], but unreadable dates map to [`EPOCH_KEY`].
pub fn date_key_or_epoch(d: Option<NaiveDateTime>) -> String {
    match d {
        Some(d) => date_key(d),
        None => {
            warn!("missing date, using sentinel key {EPOCH_KEY}");
            EPOCH_KEY.to_owned()
        }
    }
}

/// Minutes elapsed since midnight, including the fractional seconds part.
pub fn minutes_since_midnight(t: NaiveDateTime) -> f32 {
    t.hour() as f32 * 60.0 + t.minute() as f32 + t.second() as f32 / 60.0
}

/// The Sunday that opens the week containing `d`.
pub fn week_start(d: impl AsDate) -> NaiveDate {
    let date = d.as_date();
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The first day of the month containing `d`.
pub fn month_start(d: impl AsDate) -> NaiveDate {
    let date = d.as_date();
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map_or(31, |last| last.day())
}

/// The seven dates of the Sunday-start week containing `d`.
pub fn week_dates(d: impl AsDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let start = week_start(d);
    std::array::from_fn(|offset| start + Duration::days(offset as i64))
}

/// A 6 × 7 grid covering the month of `d`, padded with the tail of the
/// previous month and the head of the next one.
pub fn month_dates(d: impl AsDate, today: NaiveDate) -> Vec<CalendarDate> {
    let first = month_start(d);
    let grid_start = week_start(first);

    (0..MONTH_GRID_CELLS)
        .map(|offset| {
            let date = grid_start + Duration::days(offset as i64);
            CalendarDate {
                date,
                is_today: date == today,
                is_current_month: date.year() == first.year() && date.month() == first.month(),
            }
        })
        .collect()
}
