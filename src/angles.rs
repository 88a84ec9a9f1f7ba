pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000: f64 = 2451545.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Reduces hours into [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}

/// Reduces an hour angle into (-12, 12].
pub fn normalize_hour_angle(hours: f64) -> f64 {
    let h = normalize_hours(hours);
    if h > 12.0 {
        h - 24.0
    } else {
        h
    }
}

pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Local sidereal time in hours for a Julian date and east longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    let gmst = normalize_angle(280.46061837 + 360.98564736629 * (jd - J2000));
    normalize_hours(gmst / DEGREES_PER_HOUR + longitude / DEGREES_PER_HOUR)
}

pub fn hour_angle(lst: f64, ra: f64) -> f64 {
    normalize_hour_angle(lst - ra)
}

/// Sine of the altitude of a body at declination `dec` (degrees) and hour
/// angle `ha` (hours), for a latitude given by its sine and cosine.
pub fn sine_altitude(sin_lat: f64, cos_lat: f64, dec: f64, ha: f64) -> f64 {
    let dec_rad = deg_to_rad(dec);
    let ha_rad = deg_to_rad(DEGREES_PER_HOUR * ha);
    sin_lat * dec_rad.sin() + cos_lat * dec_rad.cos() * ha_rad.cos()
}

/// Sine of the altitude at which the Moon's centre is taken to rise or set.
pub fn horizon_threshold(horizon_altitude_deg: f64) -> f64 {
    deg_to_rad(horizon_altitude_deg).sin()
}
