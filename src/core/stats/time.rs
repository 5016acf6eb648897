//! Most frequent travel times: month, day of week, start hour.

use crate::core::stats::{count_values, mode_of};
use crate::errors::AppResult;
use crate::models::filter::{DayFilter, Filter, MonthFilter};
use crate::models::trip::TripTable;
use crate::ui::messages::header;
use crate::ui::prompt::{Flow, Prompter};
use crate::utils::colors::highlight;
use crate::utils::date::{month_name, weekday_from_monday_index, weekday_name};
use crate::utils::formatting::{elapsed_line, print_separator};
use chrono::Weekday;
use std::io::BufRead;
use std::time::Instant;

#[derive(Debug)]
pub struct TimeStats {
    pub common_month: Option<u32>,
    pub common_day: Option<Weekday>,
    pub common_hour: Option<u32>,
}

pub fn compute(table: &TripTable) -> TimeStats {
    let months = count_values(table.trips.iter().map(|t| t.month));
    let days = count_values(table.trips.iter().map(|t| t.weekday.num_days_from_monday()));
    let hours = count_values(table.trips.iter().map(|t| t.hour));

    TimeStats {
        common_month: mode_of(&months).map(|(m, _)| *m),
        common_day: mode_of(&days).map(|(d, _)| weekday_from_monday_index(*d)),
        common_hour: mode_of(&hours).map(|(h, _)| *h),
    }
}

pub fn run<R: BufRead>(
    table: &TripTable,
    filter: &Filter,
    p: &mut Prompter<R>,
) -> AppResult<Flow> {
    header("Calculating The Most Frequent Times of Travel...");
    let started = Instant::now();

    let stats = compute(table);

    match filter.month {
        MonthFilter::Month(m) => {
            println!();
            println!(
                "You filtered the data by {}, so we can't show the most common month.",
                m.name()
            );
        }
        MonthFilter::All => {
            println!();
            match stats.common_month {
                Some(m) => println!(
                    "The most common month for bikeshare use was: {}",
                    highlight(month_name(m))
                ),
                None => println!("No trips matched your filter."),
            }
        }
    }

    match filter.day {
        DayFilter::Day(d) => {
            println!();
            println!(
                "You filtered by {}, so we can't show the most common day.",
                weekday_name(d)
            );
        }
        DayFilter::All => {
            println!();
            match stats.common_day {
                Some(d) => println!(
                    "The most common day of the week for bikeshare use was: {}",
                    highlight(weekday_name(d))
                ),
                None => println!("No trips matched your filter."),
            }
        }
    }

    println!();
    match stats.common_hour {
        Some(h) => println!(
            "The most common start hour for bikeshare use was: {}",
            highlight(h)
        ),
        None => println!("No trips matched your filter."),
    }

    println!();
    println!("{}", elapsed_line(started.elapsed().as_secs_f64()));
    print_separator();

    println!();
    println!("We are now going to display some more statistics.");
    p.checkpoint()
}
