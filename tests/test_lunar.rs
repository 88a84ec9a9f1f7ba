use moon_riseset::angles::{julian_centuries, rad_to_deg};
use moon_riseset::lunar::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// 1992 April 12, 0h: λ = 133.162655°, β = -3.229126°,
// α = 134.688470°, δ = 13.768368° (full theory).
const JD_1992_04_12: f64 = 2448724.5;

// ── Series tables ──

#[test]
fn test_series_sizes() {
    assert_eq!(LONGITUDE_TERMS.len(), 14);
    assert_eq!(LATITUDE_TERMS.len(), 7);
}

#[test]
fn test_largest_terms() {
    // Equation of the centre, evection and variation dominate.
    let mut coeffs: Vec<f64> = LONGITUDE_TERMS.iter().map(|t| t.coeff.abs()).collect();
    coeffs.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(&coeffs[..3], &[22640.0, 4586.0, 2370.0]);
}

// ── Ecliptic position ──

#[test]
fn test_ecliptic_reference_date() {
    let pos = moon_ecliptic(julian_centuries(JD_1992_04_12));
    assert_approx!(rad_to_deg(pos.lon), 133.162655, 0.2);
    assert_approx!(rad_to_deg(pos.lat), -3.229126, 0.1);
}

#[test]
fn test_ecliptic_longitude_range() {
    for day in -20000..20000 {
        let t = day as f64 * 2.7 / 36525.0;
        let pos = moon_ecliptic(t);
        assert!(pos.lon >= 0.0 && pos.lon < std::f64::consts::TAU, "lon={}", pos.lon);
        assert!(rad_to_deg(pos.lat).abs() < 5.4, "lat={}", rad_to_deg(pos.lat));
    }
}

// ── Equatorial position ──

#[test]
fn test_equatorial_reference_date() {
    let pos = moon_position(julian_centuries(JD_1992_04_12));
    assert_approx!(pos.ra, 134.688470 / 15.0, 0.02);
    assert_approx!(pos.dec, 13.768368, 0.1);
}

#[test]
fn test_equatorial_ranges() {
    for day in -20000..20000 {
        let t = day as f64 * 1.3 / 36525.0;
        let pos = moon_position(t);
        assert!(pos.ra >= 0.0 && pos.ra < 24.0, "ra={}", pos.ra);
        assert!(pos.dec.abs() < 29.0, "dec={}", pos.dec);
    }
}

#[test]
fn test_ecliptic_to_equatorial_cardinal_points() {
    let vernal = ecliptic_to_equatorial(&EclipticPosition { lon: 0.0, lat: 0.0 });
    assert_approx!(vernal.ra, 0.0, 1e-12);
    assert_approx!(vernal.dec, 0.0, 1e-12);

    let solstice = ecliptic_to_equatorial(&EclipticPosition {
        lon: std::f64::consts::FRAC_PI_2,
        lat: 0.0,
    });
    assert_approx!(solstice.ra, 6.0, 1e-9);
    assert_approx!(solstice.dec, 23.44, 0.01);

    let autumn = ecliptic_to_equatorial(&EclipticPosition {
        lon: std::f64::consts::PI,
        lat: 0.0,
    });
    assert_approx!(autumn.ra, 12.0, 1e-9);
    assert_approx!(autumn.dec, 0.0, 1e-9);
}

#[test]
fn test_moves_eastward_about_13_degrees_per_day() {
    let t0 = julian_centuries(JD_1992_04_12);
    let t1 = julian_centuries(JD_1992_04_12 + 1.0);
    let l0 = rad_to_deg(moon_ecliptic(t0).lon);
    let l1 = rad_to_deg(moon_ecliptic(t1).lon);
    let motion = (l1 - l0).rem_euclid(360.0);
    assert!(motion > 11.0 && motion < 16.0, "motion={}", motion);
}
