use chrono::{FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;

use moon_riseset::angles::deg_to_rad;
use moon_riseset::day_table::*;
use moon_riseset::types::*;
use moon_riseset::MoonError;

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

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn greenwich() -> Observer {
    Observer::new(51.48, 0.0)
}

fn london_table(y: i32, m: u32, d: u32) -> DayTable {
    build_day_table(&Tz::Europe__London, &greenwich(), date(y, m, d), &MoonConfig::default())
        .unwrap()
}

// ── Layout ──

#[test]
fn test_sample_count_and_spacing() {
    let table = london_table(2025, 2, 17);
    assert_eq!(table.samples.len(), PREC + 1);
    assert_eq!(table.start, 1739750400);
    assert_eq!(table.end, 1739750400 + 86400);
    assert_eq!(table.tdiff, 3600);
    assert_eq!(table.tdiff * PREC as i64, 86400);
    for (i, s) in table.samples.iter().enumerate() {
        assert_eq!(s.timestamp, table.samples[0].timestamp + i as i64 * table.tdiff);
    }
    assert_eq!(table.samples[PREC].timestamp, table.end);
}

#[test]
fn test_spring_forward_day_is_23_hours() {
    let table = london_table(2025, 3, 30);
    assert_eq!(table.end - table.start, 23 * 3600);
    assert_eq!(table.tdiff, 3450);
    assert_eq!(table.samples[PREC].timestamp, table.end);
}

#[test]
fn test_fall_back_day_is_25_hours() {
    let table = london_table(2025, 10, 26);
    assert_eq!(table.end - table.start, 25 * 3600);
    assert_eq!(table.tdiff, 3750);
    assert_eq!(table.samples[PREC].timestamp, table.end);
}

#[test]
fn test_fixed_offset_calendar() {
    let tz = FixedOffset::east_opt(10 * 3600).unwrap();
    let table =
        build_day_table(&tz, &greenwich(), date(2025, 2, 17), &MoonConfig::default()).unwrap();
    assert_eq!(table.start, 1739750400 - 10 * 3600);
    assert_eq!(table.tdiff, 3600);
}

// ── Sample contents ──

#[test]
fn test_sample_quantities_in_range() {
    let table = london_table(2025, 2, 17);
    for s in &table.samples {
        assert!(s.lst >= 0.0 && s.lst < 24.0, "lst={}", s.lst);
        assert!(s.ra >= 0.0 && s.ra < 24.0, "ra={}", s.ra);
        assert!(s.ha > -12.0 && s.ha <= 12.0, "ha={}", s.ha);
        assert!(s.dec.abs() < 29.0, "dec={}", s.dec);
        assert!(s.sin_alt >= -1.0 && s.sin_alt <= 1.0, "sin_alt={}", s.sin_alt);
    }
}

#[test]
fn test_hour_angle_consistent_with_lst_and_ra() {
    let table = london_table(2025, 2, 17);
    for s in &table.samples {
        let diff = (s.lst - s.ra - s.ha).rem_euclid(24.0);
        assert!(diff < 1e-9 || diff > 24.0 - 1e-9, "diff={}", diff);
    }
}

#[test]
fn test_first_sample_julian_date() {
    let table = london_table(2025, 2, 17);
    assert_approx!(table.samples[0].jd, 2460723.5, 1e-9);
    assert_approx!(table.samples[12].jd, 2460724.0, 1e-9);
}

#[test]
fn test_cached_latitude_trig() {
    let table = london_table(2025, 2, 17);
    assert_approx!(table.sin_lat, deg_to_rad(51.48).sin(), 1e-15);
    assert_approx!(table.cos_lat, deg_to_rad(51.48).cos(), 1e-15);
}

#[test]
fn test_moon_advances_through_the_day() {
    let table = london_table(2025, 2, 17);
    let first = table.samples[0].ra;
    let last = table.samples[PREC].ra;
    let motion = (last - first).rem_euclid(24.0);
    assert!(motion > 0.6 && motion < 1.2, "ra motion={}", motion);
}

#[test]
fn test_sample_at_matches_table() {
    let table = london_table(2025, 2, 17);
    let s = sample_at(&greenwich(), table.sin_lat, table.cos_lat, table.samples[5].timestamp)
        .unwrap();
    assert_eq!(s, table.samples[5]);
}

#[test]
fn test_rebuild_is_deterministic() {
    assert_eq!(london_table(2025, 6, 7), london_table(2025, 6, 7));
}

// ── Validity range ──

#[test]
fn test_years_outside_range_rejected() {
    let config = MoonConfig::default();
    for year in [1582, 2501, -4000, 9999] {
        let result = build_day_table(&Utc, &greenwich(), date(year, 6, 1), &config);
        assert_eq!(
            result,
            Err(MoonError::OutOfRange { year, min: 1583, max: 2500 })
        );
    }
}

#[test]
fn test_range_boundaries_accepted() {
    let config = MoonConfig::default();
    assert!(build_day_table(&Utc, &greenwich(), date(1583, 1, 1), &config).is_ok());
    assert!(build_day_table(&Utc, &greenwich(), date(2500, 12, 31), &config).is_ok());
}

#[test]
fn test_check_year_custom_range() {
    let config = MoonConfig {
        min_year: 1900,
        max_year: 2100,
        ..MoonConfig::default()
    };
    assert!(check_year(1900, &config).is_ok());
    assert!(check_year(1899, &config).is_err());
    assert!(check_year(2101, &config).is_err());
}
