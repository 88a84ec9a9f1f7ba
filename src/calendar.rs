use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::MoonError;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// Length of `month` (1-12) in `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let idx = month.checked_sub(1)? as usize;
    days_in_months(year).get(idx).copied()
}

pub fn validate_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, MoonError> {
    let invalid = MoonError::InvalidDate { year, month, day };
    match days_in_month(year, month) {
        Some(dim) if (1..=dim).contains(&day) => {
            NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid)
        }
        _ => Err(invalid),
    }
}

/// Julian Day Number of a Gregorian calendar date (the day starting at noon).
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Julian date of a Unix timestamp.
pub fn julian_date(timestamp: i64) -> Option<f64> {
    let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
    let jdn = julian_day_number(utc.year(), utc.month(), utc.day());
    Some(jdn as f64 - 0.5 + utc.num_seconds_from_midnight() as f64 / 86400.0)
}

pub fn parse_timezone(name: &str) -> Result<Tz, MoonError> {
    name.parse::<Tz>()
        .map_err(|_| MoonError::UnknownTimezone(name.to_owned()))
}

/// Civil time services of the observer's timezone.
pub trait CivilCalendar {
    /// Unix timestamp of the first instant of `date` in local time.
    fn local_midnight(&self, date: NaiveDate) -> Option<i64>;

    /// Local calendar date containing `timestamp`.
    fn local_date(&self, timestamp: i64) -> Option<NaiveDate>;

    /// Local wall-clock hour and minute of `timestamp`.
    fn local_clock(&self, timestamp: i64) -> Option<(u32, u32)>;
}

const MIDNIGHT_SEARCH_STEP_MINUTES: i64 = 15;
const MIDNIGHT_SEARCH_STEPS: i64 = 24 * 60 / MIDNIGHT_SEARCH_STEP_MINUTES;

impl<Z: TimeZone> CivilCalendar for Z {
    fn local_midnight(&self, date: NaiveDate) -> Option<i64> {
        let mut local = date.and_hms_opt(0, 0, 0)?;
        // Midnight may be skipped by a DST change; the day then starts at
        // the first valid wall-clock time.
        for _ in 0..MIDNIGHT_SEARCH_STEPS {
            if let Some(dt) = self.from_local_datetime(&local).earliest() {
                return Some(dt.timestamp());
            }
            local += TimeDelta::minutes(MIDNIGHT_SEARCH_STEP_MINUTES);
        }
        None
    }

    fn local_date(&self, timestamp: i64) -> Option<NaiveDate> {
        let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
        Some(utc.with_timezone(self).date_naive())
    }

    fn local_clock(&self, timestamp: i64) -> Option<(u32, u32)> {
        let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
        let local = utc.with_timezone(self);
        Some((local.hour(), local.minute()))
    }
}
