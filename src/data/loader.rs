//! Dataset loader: reads a city's CSV export, derives the time-part fields
//! from the start timestamp, and applies the month/day restriction.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filter::{DayFilter, Filter, MonthFilter};
use crate::models::trip::{Trip, TripRecord, TripTable};
use std::fs::File;

/// Load the trips for the filter's city, keeping only rows whose derived
/// month/day match the filter (wildcard = no restriction). An unreadable
/// source file is fatal; there is no retry.
pub fn load(cfg: &Config, filter: &Filter) -> AppResult<TripTable> {
    let path = cfg.path_for(filter.city);

    let file = File::open(&path).map_err(|e| AppError::DataSource {
        city: filter.city.title().to_string(),
        path: path.display().to_string(),
        source: e,
    })?;

    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr.headers()?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut trips = Vec::new();
    for record in rdr.deserialize::<TripRecord>() {
        let trip = Trip::from_record(record?)?;

        let month_ok = match filter.month {
            MonthFilter::All => true,
            MonthFilter::Month(m) => trip.month == m.number(),
        };
        let day_ok = match filter.day {
            DayFilter::All => true,
            DayFilter::Day(d) => trip.weekday == d,
        };

        if month_ok && day_ok {
            trips.push(trip);
        }
    }

    Ok(TripTable {
        trips,
        has_gender,
        has_birth_year,
    })
}
