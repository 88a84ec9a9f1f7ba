use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::angles::horizon_threshold;
use crate::calendar::{days_in_month, parse_timezone, validate_date, CivilCalendar};
use crate::day_table::{build_day_table, check_year};
use crate::error::MoonError;
use crate::events::detect_events;
use crate::types::{DayEvents, DayTable, Event, MoonConfig, MoonEvents, Observer};

/// Computes the day table and Moon events for one local calendar date.
pub fn compute_moon_events<C>(
    calendar: &C,
    observer: &Observer,
    date: NaiveDate,
    config: &MoonConfig,
) -> Result<(DayTable, MoonEvents), MoonError>
where
    C: CivilCalendar + ?Sized,
{
    let table = build_day_table(calendar, observer, date, config)?;
    let threshold = horizon_threshold(config.horizon_altitude_deg);
    let events = detect_events(calendar, &table, threshold)?;
    log::debug!(
        "{date}: rise {} set {} transit {} rise2 {} set2 {}",
        events.rise.hh_mm(),
        events.set.hh_mm(),
        events.transit.hh_mm(),
        events.rise2.hh_mm(),
        events.set2.hh_mm(),
    );
    Ok((table, events))
}

/// Moon rise, set and transit times for a fixed observer.
///
/// Holds the day table and events of the last date set; each successful
/// [`set_date`](Self::set_date) replaces both, a failed one leaves them
/// untouched.
#[derive(Debug, Clone)]
pub struct MoonRiseSet<C = Tz> {
    observer: Observer,
    calendar: C,
    config: MoonConfig,
    table: Option<DayTable>,
    events: MoonEvents,
}

impl MoonRiseSet<Tz> {
    /// Observer at `latitude`/`longitude` (degrees, east positive) keeping
    /// civil time in the IANA zone `timezone`.
    pub fn new(latitude: f64, longitude: f64, timezone: &str) -> Result<Self, MoonError> {
        Ok(Self::with_calendar(
            Observer::new(latitude, longitude),
            parse_timezone(timezone)?,
        ))
    }
}

impl<C: CivilCalendar> MoonRiseSet<C> {
    pub fn with_calendar(observer: Observer, calendar: C) -> Self {
        Self::with_config(observer, calendar, MoonConfig::default())
    }

    pub fn with_config(observer: Observer, calendar: C, config: MoonConfig) -> Self {
        Self {
            observer,
            calendar,
            config,
            table: None,
            events: MoonEvents::default(),
        }
    }

    /// Moves the observer. Results of the previous date are discarded.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.observer = Observer::new(latitude, longitude);
        self.table = None;
        self.events = MoonEvents::default();
    }

    /// Recomputes all events for the given local calendar date.
    pub fn set_date(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<&MoonEvents, MoonError> {
        let date = self.checked_date(year, month, day)?;
        let (table, events) =
            compute_moon_events(&self.calendar, &self.observer, date, &self.config)?;
        self.table = Some(table);
        self.events = events;
        Ok(&self.events)
    }

    /// Events of every day of a month, leaving the current date untouched.
    pub fn month(&self, year: i32, month: u32) -> Result<Vec<DayEvents>, MoonError> {
        self.checked_date(year, month, 1)?;
        let days = days_in_month(year, month)
            .ok_or(MoonError::InvalidDate { year, month, day: 1 })?;
        (1..=days)
            .map(|day| {
                let date = validate_date(year, month, day)?;
                let (_, events) =
                    compute_moon_events(&self.calendar, &self.observer, date, &self.config)?;
                Ok(DayEvents { date, events })
            })
            .collect()
    }

    fn checked_date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, MoonError> {
        check_year(year, &self.config)
            .and_then(|_| validate_date(year, month, day))
            .inspect_err(|e| log::warn!("rejecting {year:04}-{month:02}-{day:02}: {e}"))
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn config(&self) -> &MoonConfig {
        &self.config
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Date of the current results, if any date has been set.
    pub fn date(&self) -> Option<NaiveDate> {
        self.table.as_ref().map(|t| t.date)
    }

    pub fn day_table(&self) -> Option<&DayTable> {
        self.table.as_ref()
    }

    pub fn events(&self) -> &MoonEvents {
        &self.events
    }

    pub fn transit(&self) -> &Event {
        &self.events.transit
    }

    pub fn rise(&self) -> &Event {
        &self.events.rise
    }

    pub fn set(&self) -> &Event {
        &self.events.set
    }

    pub fn rise2(&self) -> &Event {
        &self.events.rise2
    }

    pub fn set2(&self) -> &Event {
        &self.events.set2
    }
}
