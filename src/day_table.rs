use chrono::{Datelike, NaiveDate};

use crate::angles::{
    deg_to_rad, hour_angle, julian_centuries, local_sidereal_time, sine_altitude,
};
use crate::calendar::{julian_date, CivilCalendar};
use crate::error::MoonError;
use crate::lunar::moon_position;
use crate::types::{DayTable, MoonConfig, Observer, Sample, PREC};

pub fn check_year(year: i32, config: &MoonConfig) -> Result<(), MoonError> {
    if (config.min_year..=config.max_year).contains(&year) {
        Ok(())
    } else {
        Err(MoonError::OutOfRange {
            year,
            min: config.min_year,
            max: config.max_year,
        })
    }
}

pub fn sample_at(
    observer: &Observer,
    sin_lat: f64,
    cos_lat: f64,
    timestamp: i64,
) -> Result<Sample, MoonError> {
    let jd = julian_date(timestamp).ok_or(MoonError::TimestampOutOfRange(timestamp))?;
    let lst = local_sidereal_time(jd, observer.longitude);
    let pos = moon_position(julian_centuries(jd));
    let ha = hour_angle(lst, pos.ra);
    Ok(Sample {
        timestamp,
        jd,
        lst,
        ra: pos.ra,
        dec: pos.dec,
        ha,
        sin_alt: sine_altitude(sin_lat, cos_lat, pos.dec, ha),
    })
}

/// Samples the Moon's position over the local calendar day `date`.
///
/// The day runs from local midnight to the next local midnight, so it is
/// 23 or 25 hours long on DST change days.
pub fn build_day_table<C>(
    calendar: &C,
    observer: &Observer,
    date: NaiveDate,
    config: &MoonConfig,
) -> Result<DayTable, MoonError>
where
    C: CivilCalendar + ?Sized,
{
    check_year(date.year(), config)?;

    let next = date.succ_opt().ok_or(MoonError::NoLocalMidnight(date))?;
    let start = calendar
        .local_midnight(date)
        .ok_or(MoonError::NoLocalMidnight(date))?;
    let end = calendar
        .local_midnight(next)
        .ok_or(MoonError::NoLocalMidnight(next))?;
    let tdiff = (end - start) / PREC as i64;
    log::trace!("{date}: day spans {start}..{end}, {tdiff} s per sample");

    let lat_rad = deg_to_rad(observer.latitude);
    let (sin_lat, cos_lat) = (lat_rad.sin(), lat_rad.cos());

    let samples = (0..=PREC as i64)
        .map(|i| sample_at(observer, sin_lat, cos_lat, start + i * tdiff))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DayTable {
        date,
        start,
        end,
        tdiff,
        sin_lat,
        cos_lat,
        samples,
    })
}
