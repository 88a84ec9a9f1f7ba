pub mod angles;
pub mod calendar;
pub mod day_table;
pub mod error;
pub mod events;
pub mod format;
pub mod lunar;
pub mod moon;
pub mod quadratic;
pub mod types;

pub use angles::{
    deg_to_rad, horizon_threshold, hour_angle, julian_centuries, local_sidereal_time,
    normalize_angle, normalize_hour_angle, normalize_hours, rad_to_deg, sine_altitude,
    DEGREES_PER_HOUR, J2000,
};

pub use calendar::{
    days_in_month, julian_date, julian_day_number, leap_year, parse_timezone, validate_date,
    CivilCalendar,
};

pub use day_table::build_day_table;
pub use error::MoonError;
pub use events::{detect_events, find_horizon_crossings, find_transit, HorizonCrossings};
pub use format::{format_instant, round_to_minute};
pub use lunar::{moon_position, EquatorialPosition};
pub use moon::{compute_moon_events, MoonRiseSet};
pub use quadratic::find_roots;

pub use types::{
    DayEvents, DayTable, Event, EventTime, MoonConfig, MoonEvents, Observer, QuadRoots, Sample,
    PREC,
};
