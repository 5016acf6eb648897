use super::{gender::Gender, user_type::UserType};
use crate::errors::AppResult;
use crate::utils::date::{parse_optional_timestamp, parse_timestamp};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// One CSV row as exported by the city feeds. The unnamed leading index
/// column is ignored; Gender and Birth Year exist only in the Chicago and
/// New York City files.
#[derive(Debug, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,

    #[serde(rename = "End Time")]
    pub end_time: Option<String>,

    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,

    #[serde(rename = "Start Station")]
    pub start_station: String,

    #[serde(rename = "End Station")]
    pub end_station: String,

    #[serde(rename = "User Type")]
    pub user_type: Option<String>,

    #[serde(rename = "Gender")]
    pub gender: Option<String>,

    #[serde(rename = "Birth Year")]
    pub birth_year: Option<f64>,
}

/// A trip record after parsing, with the time parts derived from the start
/// timestamp at load time.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: i64,
    pub user_type: Option<UserType>,
    pub gender: Option<Gender>,
    pub birth_year: Option<i32>,

    pub month: u32,       // 1-based
    pub weekday: Weekday,
    pub hour: u32,        // 0-23
}

impl Trip {
    pub fn from_record(rec: TripRecord) -> AppResult<Self> {
        let start = parse_timestamp(&rec.start_time)?;

        Ok(Self {
            end: parse_optional_timestamp(rec.end_time.as_deref()),
            start_station: rec.start_station,
            end_station: rec.end_station,
            duration_secs: rec.trip_duration.round() as i64,
            user_type: rec.user_type.as_deref().and_then(UserType::ut_from_str),
            gender: rec.gender.as_deref().and_then(Gender::g_from_str),
            birth_year: rec.birth_year.map(|y| y as i32),
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            start,
        })
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        match &self.end {
            Some(e) => e.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "-".to_string(),
        }
    }
}

/// The filtered trip set handed to the query engine. The two flags record
/// whether the source file carried the demographic columns at all, which is
/// what the user-stats branches check (column presence, not value presence).
#[derive(Debug)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
