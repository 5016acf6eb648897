//! Filter vocabulary: the month/day enumerations the selector validates
//! against, plus the combined Filter triple handed to the loader.

use crate::models::city::City;
use crate::utils::date::weekday_name;
use chrono::Weekday;
use std::fmt;

/// The six months covered by the published exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// 1-based month number, matching the derived `Trip::month` field.
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl MonthFilter {
    /// Parse free-text console input. `all` and `all months` are wildcards.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all months" => Some(MonthFilter::All),
            "january" => Some(MonthFilter::Month(Month::January)),
            "february" => Some(MonthFilter::Month(Month::February)),
            "march" => Some(MonthFilter::Month(Month::March)),
            "april" => Some(MonthFilter::Month(Month::April)),
            "may" => Some(MonthFilter::Month(Month::May)),
            "june" => Some(MonthFilter::Month(Month::June)),
            _ => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthFilter::All)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all months"),
            MonthFilter::Month(m) => write!(f, "{}", m.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Parse free-text console input. Only full weekday names and `all`
    /// belong to the vocabulary.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(DayFilter::All),
            "monday" => Some(DayFilter::Day(Weekday::Mon)),
            "tuesday" => Some(DayFilter::Day(Weekday::Tue)),
            "wednesday" => Some(DayFilter::Day(Weekday::Wed)),
            "thursday" => Some(DayFilter::Day(Weekday::Thu)),
            "friday" => Some(DayFilter::Day(Weekday::Fri)),
            "saturday" => Some(DayFilter::Day(Weekday::Sat)),
            "sunday" => Some(DayFilter::Day(Weekday::Sun)),
            _ => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DayFilter::All)
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "all"),
            DayFilter::Day(d) => write!(f, "{}", weekday_name(*d)),
        }
    }
}

/// A validated (city, month, day) selection. Only values from the fixed
/// enumerations above can appear here.
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
