use crate::calendar::CivilCalendar;
use crate::error::MoonError;
use crate::format::format_instant;
use crate::quadratic::find_roots;
use crate::types::{DayTable, Event, MoonEvents};

/// Horizon crossings found in a day table, as fractional epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizonCrossings {
    pub above_at_start: bool,
    pub rise: Option<f64>,
    pub set: Option<f64>,
    pub rise2: Option<f64>,
    pub set2: Option<f64>,
}

impl HorizonCrossings {
    fn record_rise(&mut self, t: f64) {
        log::trace!("rise at {t:.0}");
        if self.rise.is_none() {
            self.rise = Some(t);
        } else if self.rise2.is_none() {
            self.rise2 = Some(t);
        }
    }

    fn record_set(&mut self, t: f64) {
        log::trace!("set at {t:.0}");
        if self.set.is_none() {
            self.set = Some(t);
        } else if self.set2.is_none() {
            self.set2 = Some(t);
        }
    }

    pub fn any(&self) -> bool {
        self.rise.is_some() || self.set.is_some()
    }
}

/// Centres of the three-sample windows: every odd index.
fn window_centres(table: &DayTable) -> impl Iterator<Item = usize> {
    (1..table.samples.len().saturating_sub(1)).step_by(2)
}

/// Instant the Moon crosses the meridian above the horizon, if it does.
pub fn find_transit(table: &DayTable) -> Option<f64> {
    let s = &table.samples;
    window_centres(table).find_map(|i| {
        let (m, z, p) = (&s[i - 1], &s[i], &s[i + 1]);
        if m.sin_alt <= 0.0 || z.sin_alt <= 0.0 || p.sin_alt <= 0.0 {
            return None;
        }
        let crosses = (m.ha < 0.0 && z.ha >= 0.0) || (z.ha <= 0.0 && p.ha > 0.0);
        if !crosses {
            return None;
        }
        let roots = find_roots(m.ha, z.ha, p.ha);
        (roots.count > 0).then(|| table.instant_at(i, roots.z1))
    })
}

/// Scans the whole table for crossings of the altitude whose sine is
/// `threshold`.
pub fn find_horizon_crossings(table: &DayTable, threshold: f64) -> HorizonCrossings {
    let s = &table.samples;
    let mut crossings = HorizonCrossings {
        above_at_start: s.first().is_some_and(|s0| s0.sin_alt > threshold),
        ..Default::default()
    };

    for i in window_centres(table) {
        let ym = s[i - 1].sin_alt - threshold;
        let yz = s[i].sin_alt - threshold;
        let yp = s[i + 1].sin_alt - threshold;
        let roots = find_roots(ym, yz, yp);

        match roots.count {
            1 => {
                let t = table.instant_at(i, roots.z1);
                if ym < 0.0 {
                    crossings.record_rise(t);
                } else {
                    crossings.record_set(t);
                }
            }
            2 => {
                // Both crossings of one window always land in the primary
                // slots, replacing anything found earlier.
                let first = table.instant_at(i, roots.z1);
                let second = table.instant_at(i, roots.z2);
                let (rise, set) = if roots.ye < 0.0 {
                    (second, first)
                } else {
                    (first, second)
                };
                log::trace!("rise at {rise:.0}, set at {set:.0} in one window");
                crossings.rise = Some(rise);
                crossings.set = Some(set);
            }
            _ => {}
        }
    }
    crossings
}

fn occurrence<C>(calendar: &C, t: Option<f64>, missing: Event) -> Result<Event, MoonError>
where
    C: CivilCalendar + ?Sized,
{
    match t {
        Some(t) => Ok(Event::Occurs(format_instant(calendar, t)?)),
        None => Ok(missing),
    }
}

/// Turns raw crossings into events.
///
/// With no crossing at all both rise and set report whether the Moon stayed
/// up or down. A missing rise alone is `NotFound`, while a missing set alone
/// is reported as `AlwaysAbove`.
pub fn classify_crossings<C>(
    calendar: &C,
    transit: Option<f64>,
    crossings: &HorizonCrossings,
) -> Result<MoonEvents, MoonError>
where
    C: CivilCalendar + ?Sized,
{
    let (rise, set) = if crossings.any() {
        (
            occurrence(calendar, crossings.rise, Event::NotFound)?,
            occurrence(calendar, crossings.set, Event::AlwaysAbove)?,
        )
    } else if crossings.above_at_start {
        (Event::AlwaysAbove, Event::AlwaysAbove)
    } else {
        (Event::AlwaysBelow, Event::AlwaysBelow)
    };

    Ok(MoonEvents {
        transit: occurrence(calendar, transit, Event::NotFound)?,
        rise,
        set,
        rise2: occurrence(calendar, crossings.rise2, Event::NotFound)?,
        set2: occurrence(calendar, crossings.set2, Event::NotFound)?,
    })
}

pub fn detect_events<C>(
    calendar: &C,
    table: &DayTable,
    threshold: f64,
) -> Result<MoonEvents, MoonError>
where
    C: CivilCalendar + ?Sized,
{
    let transit = find_transit(table);
    let crossings = find_horizon_crossings(table, threshold);
    classify_crossings(calendar, transit, &crossings)
}
