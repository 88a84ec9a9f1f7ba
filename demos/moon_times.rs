//! Prints moon rise, transit and set times.
//!
//! ```text
//! cargo run --example moon_times -- --lat 51.48 --lon 0.0 --tz Europe/London 2025-02-17
//! cargo run --example moon_times -- --lat 66.5 --lon -18.0 --tz Etc/GMT 2025-06
//! ```

use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};
use clap::Parser;

use moon_riseset::{MoonError, MoonEvents, MoonRiseSet};

/// A single day or a whole month.
#[derive(Debug, Clone, Copy)]
enum Period {
    Day(NaiveDate),
    Month(NaiveDate),
}

fn parse_period(s: &str) -> Result<Period, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(Period::Day(date));
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map(Period::Month)
        .map_err(|_| format!("expected YYYY-MM-DD or YYYY-MM, got {s:?}"))
}

#[derive(Parser)]
#[command(
    name = "moon_times",
    about = "Moon rise, transit and set times",
    allow_negative_numbers = true
)]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(long)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long)]
    lon: f64,
    /// IANA timezone identifier (e.g. Europe/London)
    #[arg(long, default_value = "Etc/GMT")]
    tz: String,
    /// Date (YYYY-MM-DD) or month (YYYY-MM)
    #[arg(value_parser = parse_period)]
    period: Period,
}

fn print_header() {
    println!("Date         Rise   Transit  Set    Rise2  Set2");
}

fn print_row(date: NaiveDate, e: &MoonEvents) {
    println!(
        "{:<12} {}  {}    {}  {}  {}",
        date.to_string(),
        e.rise.hh_mm(),
        e.transit.hh_mm(),
        e.set.hh_mm(),
        e.rise2.hh_mm(),
        e.set2.hh_mm()
    );
}

fn run(cli: &Cli) -> Result<(), MoonError> {
    let mut moon = MoonRiseSet::new(cli.lat, cli.lon, &cli.tz)?;

    println!("=== Moon Rise/Set ===");
    println!(
        "Location: {:.2}°{}, {:.2}°{} ({})",
        cli.lat.abs(),
        if cli.lat >= 0.0 { "N" } else { "S" },
        cli.lon.abs(),
        if cli.lon >= 0.0 { "E" } else { "W" },
        cli.tz
    );
    println!();

    match cli.period {
        Period::Day(date) => {
            let events = moon.set_date(date.year(), date.month(), date.day())?;
            print_header();
            print_row(date, events);
        }
        Period::Month(first) => {
            let days = moon.month(first.year(), first.month())?;
            print_header();
            for day in &days {
                print_row(day.date, &day.events);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
