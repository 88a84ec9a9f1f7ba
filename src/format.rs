use crate::calendar::CivilCalendar;
use crate::error::MoonError;
use crate::types::EventTime;

/// Rounds `t` to the nearest minute unless that would move it onto another
/// local calendar day, in which case it is truncated to the second.
pub fn round_to_minute<C>(calendar: &C, t: f64) -> Result<i64, MoonError>
where
    C: CivilCalendar + ?Sized,
{
    let exact = t.floor() as i64;
    let rounded = ((t / 60.0 + 0.5).floor() * 60.0) as i64;
    let day = calendar
        .local_date(exact)
        .ok_or(MoonError::TimestampOutOfRange(exact))?;
    if calendar.local_date(rounded) == Some(day) {
        Ok(rounded)
    } else {
        Ok(exact)
    }
}

pub fn format_instant<C>(calendar: &C, t: f64) -> Result<EventTime, MoonError>
where
    C: CivilCalendar + ?Sized,
{
    let timestamp = round_to_minute(calendar, t)?;
    let (hour, minute) = calendar
        .local_clock(timestamp)
        .ok_or(MoonError::TimestampOutOfRange(timestamp))?;
    Ok(EventTime {
        timestamp,
        hhmm: format!("{:02}{:02}", hour, minute),
        hh_mm: format!("{:02}:{:02}", hour, minute),
    })
}
