//! Low-precision lunar ephemeris.
//!
//! Truncated periodic series for the Moon's ecliptic longitude and latitude,
//! rotated to the equator with a fixed mean obliquity. Accuracy is about
//! 5' in right ascension and 1' in declination for several centuries around
//! J2000.0.

use std::f64::consts::TAU;

use crate::angles::{normalize_hours, rad_to_deg, DEGREES_PER_HOUR};

/// Arc-seconds per radian.
const ARC: f64 = 206264.8062;
const SIN_EPS: f64 = 0.39778;
const COS_EPS: f64 = 0.91748;

/// One periodic term: coefficient in arc-seconds and multipliers of the
/// Moon's mean anomaly, the Sun's mean anomaly, the elongation and the
/// argument of latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub coeff: f64,
    pub l: f64,
    pub ls: f64,
    pub d: f64,
    pub f: f64,
}

const fn term(coeff: f64, l: f64, ls: f64, d: f64, f: f64) -> PeriodicTerm {
    PeriodicTerm { coeff, l, ls, d, f }
}

/// Perturbations in ecliptic longitude.
pub const LONGITUDE_TERMS: [PeriodicTerm; 14] = [
    term(22640.0, 1.0, 0.0, 0.0, 0.0),
    term(-4586.0, 1.0, 0.0, -2.0, 0.0),
    term(2370.0, 0.0, 0.0, 2.0, 0.0),
    term(769.0, 2.0, 0.0, 0.0, 0.0),
    term(-668.0, 0.0, 1.0, 0.0, 0.0),
    term(-412.0, 0.0, 0.0, 0.0, 2.0),
    term(-212.0, 2.0, 0.0, -2.0, 0.0),
    term(-206.0, 1.0, 1.0, -2.0, 0.0),
    term(192.0, 1.0, 0.0, 2.0, 0.0),
    term(-165.0, 0.0, 1.0, -2.0, 0.0),
    term(-125.0, 0.0, 0.0, 1.0, 0.0),
    term(-110.0, 1.0, 1.0, 0.0, 0.0),
    term(148.0, 1.0, -1.0, 0.0, 0.0),
    term(-55.0, 0.0, 0.0, -2.0, 2.0),
];

/// Perturbations in ecliptic latitude, mostly in `F - 2D`.
pub const LATITUDE_TERMS: [PeriodicTerm; 7] = [
    term(-526.0, 0.0, 0.0, -2.0, 1.0),
    term(44.0, 1.0, 0.0, -2.0, 1.0),
    term(-31.0, -1.0, 0.0, -2.0, 1.0),
    term(-23.0, 0.0, 1.0, -2.0, 1.0),
    term(11.0, 0.0, -1.0, -2.0, 1.0),
    term(-25.0, -2.0, 0.0, 0.0, 1.0),
    term(21.0, -1.0, 0.0, 0.0, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension, hours in [0, 24).
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Longitude, radians in [0, 2π).
    pub lon: f64,
    /// Latitude, radians.
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FundamentalArguments {
    /// Mean longitude of the Moon, revolutions.
    l0: f64,
    l: f64,
    ls: f64,
    d: f64,
    f: f64,
}

fn frac(x: f64) -> f64 {
    x - x.floor()
}

fn fundamental_arguments(t: f64) -> FundamentalArguments {
    FundamentalArguments {
        l0: frac(0.606433 + 1336.855225 * t),
        l: TAU * frac(0.374897 + 1325.552410 * t),
        ls: TAU * frac(0.993133 + 99.997361 * t),
        d: TAU * frac(0.827361 + 1236.853086 * t),
        f: TAU * frac(0.259086 + 1342.227825 * t),
    }
}

fn sum_series(terms: &[PeriodicTerm], args: &FundamentalArguments) -> f64 {
    terms
        .iter()
        .map(|t| t.coeff * (t.l * args.l + t.ls * args.ls + t.d * args.d + t.f * args.f).sin())
        .sum()
}

/// Geocentric ecliptic position of the Moon, `t` in Julian centuries since
/// J2000.0.
pub fn moon_ecliptic(t: f64) -> EclipticPosition {
    let args = fundamental_arguments(t);
    let dl = sum_series(&LONGITUDE_TERMS, &args);
    let s = args.f + (dl + 412.0 * (2.0 * args.f).sin() + 541.0 * args.ls.sin()) / ARC;
    let n = sum_series(&LATITUDE_TERMS, &args);

    EclipticPosition {
        lon: TAU * frac(args.l0 + dl / 1296.0e3),
        lat: (18520.0 * s.sin() + n) / ARC,
    }
}

pub fn ecliptic_to_equatorial(pos: &EclipticPosition) -> EquatorialPosition {
    let cb = pos.lat.cos();
    let x = cb * pos.lon.cos();
    let v = cb * pos.lon.sin();
    let w = pos.lat.sin();

    let y = COS_EPS * v - SIN_EPS * w;
    let z = SIN_EPS * v + COS_EPS * w;
    let rho = (1.0 - z * z).max(0.0).sqrt();

    EquatorialPosition {
        ra: normalize_hours(rad_to_deg(y.atan2(x)) / DEGREES_PER_HOUR),
        dec: rad_to_deg(z.atan2(rho)),
    }
}

/// Right ascension and declination of the Moon, `t` in Julian centuries
/// since J2000.0.
pub fn moon_position(t: f64) -> EquatorialPosition {
    ecliptic_to_equatorial(&moon_ecliptic(t))
}
