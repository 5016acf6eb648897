use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Weekday};

/// Timestamp format used by all three city exports.
const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TS_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&str>) -> Option<NaiveDateTime> {
    input.and_then(|s| NaiveDateTime::parse_from_str(s.trim(), TS_FORMAT).ok())
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Inverse of `Weekday::num_days_from_monday`.
pub fn weekday_from_monday_index(idx: u32) -> Weekday {
    match idx {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Full month name for a 1-based month number. The filter vocabulary only
/// covers January..June but derived data may carry any month.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
