use chrono::NaiveDate;

/// Number of intervals a local day is split into.
pub const PREC: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive. Any value is accepted and wraps.
    pub longitude: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub jd: f64,
    /// Local sidereal time, hours in [0, 24).
    pub lst: f64,
    /// Right ascension of the Moon, hours in [0, 24).
    pub ra: f64,
    /// Declination of the Moon, degrees.
    pub dec: f64,
    /// Hour angle, hours in (-12, 12].
    pub ha: f64,
    pub sin_alt: f64,
}

/// Samples covering one local calendar day, midnight to midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTable {
    pub date: NaiveDate,
    pub start: i64,
    pub end: i64,
    /// Seconds between consecutive samples.
    pub tdiff: i64,
    pub sin_lat: f64,
    pub cos_lat: f64,
    pub samples: Vec<Sample>,
}

impl DayTable {
    /// Epoch seconds of the instant `x` sample intervals after sample `i`.
    pub(crate) fn instant_at(&self, i: usize, x: f64) -> f64 {
        self.samples[i].timestamp as f64 + self.tdiff as f64 * x
    }
}

/// Parabola fitted through three samples at x = -1, 0, +1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadRoots {
    /// Number of roots inside [-1, 1].
    pub count: usize,
    pub z1: f64,
    pub z2: f64,
    /// Abscissa of the extremum.
    pub xe: f64,
    /// Value at the extremum.
    pub ye: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTime {
    pub timestamp: i64,
    /// "HHMM" in local time.
    pub hhmm: String,
    /// "HH:MM" in local time.
    pub hh_mm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Event {
    Occurs(EventTime),
    /// The Moon stays above the horizon all day.
    AlwaysAbove,
    /// The Moon stays below the horizon all day.
    AlwaysBelow,
    #[default]
    NotFound,
}

impl Event {
    pub fn timestamp(&self) -> Option<i64> {
        match self {
            Event::Occurs(t) => Some(t.timestamp),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Event::Occurs(_))
    }

    pub fn hhmm(&self) -> &str {
        match self {
            Event::Occurs(t) => &t.hhmm,
            Event::AlwaysAbove => "****",
            Event::AlwaysBelow => "----",
            Event::NotFound => "    ",
        }
    }

    pub fn hh_mm(&self) -> &str {
        match self {
            Event::Occurs(t) => &t.hh_mm,
            Event::AlwaysAbove => "**:**",
            Event::AlwaysBelow => "--:--",
            Event::NotFound => "     ",
        }
    }
}

/// Moon events of one local calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoonEvents {
    pub transit: Event,
    pub rise: Event,
    pub set: Event,
    /// Second rise of the day, only seen at high latitudes.
    pub rise2: Event,
    /// Second set of the day, only seen at high latitudes.
    pub set2: Event,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub events: MoonEvents,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonConfig {
    /// Altitude of the Moon's centre at rise and set, degrees: parallax
    /// (57') less refraction (34') and semi-diameter (15.5').
    pub horizon_altitude_deg: f64,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            horizon_altitude_deg: 0.125,
            min_year: 1583,
            max_year: 2500,
        }
    }
}
