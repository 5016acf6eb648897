//! User demographics: trip counts per user type, per gender, and the
//! birth-year range. Gender and birth year exist only for cities whose
//! export carries those columns.

use crate::core::stats::{count_values, mode_of};
use crate::errors::AppResult;
use crate::models::filter::Filter;
use crate::models::gender::Gender;
use crate::models::trip::TripTable;
use crate::models::user_type::UserType;
use crate::ui::messages::header;
use crate::ui::prompt::{Flow, Prompter};
use crate::utils::colors::highlight;
use crate::utils::formatting::{elapsed_line, print_separator};
use crate::utils::table::Table;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::time::Instant;

#[derive(Debug)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug)]
pub struct UserStats {
    pub user_type_counts: BTreeMap<UserType, usize>,
    pub gender_counts: Option<BTreeMap<Gender, usize>>,
    /// Total entry count of the gender column, not a true null count.
    pub gender_null_count: Option<usize>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute(table: &TripTable) -> UserStats {
    let user_type_counts = count_values(table.trips.iter().filter_map(|t| t.user_type));

    let gender_counts = table
        .has_gender
        .then(|| count_values(table.trips.iter().filter_map(|t| t.gender)));
    let gender_null_count = table.has_gender.then(|| table.len());

    let birth_years = table.has_birth_year.then(|| {
        let years = count_values(table.trips.iter().filter_map(|t| t.birth_year));
        let earliest = years.keys().next().copied();
        let most_recent = years.keys().next_back().copied();
        let most_common = mode_of(&years).map(|(y, _)| *y);
        match (earliest, most_recent, most_common) {
            (Some(earliest), Some(most_recent), Some(most_common)) => Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        }
    });

    UserStats {
        user_type_counts,
        gender_counts,
        gender_null_count,
        birth_years: birth_years.flatten(),
    }
}

pub fn run<R: BufRead>(
    table: &TripTable,
    filter: &Filter,
    p: &mut Prompter<R>,
) -> AppResult<Flow> {
    header("Calculating User Stats...");
    let started = Instant::now();

    let stats = compute(table);
    let city = filter.city.title();

    println!();
    println!("The table below shows the trip counts by user type:");
    println!();
    let mut t = Table::new(vec!["User Type", "Trips"]);
    for (ut, n) in &stats.user_type_counts {
        t.add_row(vec![ut.ut_as_str().to_string(), n.to_string()]);
    }
    print!("{}", t.render());

    println!();
    match &stats.gender_counts {
        Some(counts) => {
            println!("The table below shows the trip counts by gender:");
            println!();
            let mut t = Table::new(vec!["Gender", "Trips"]);
            for (g, n) in counts {
                t.add_row(vec![g.g_as_str().to_string(), n.to_string()]);
            }
            print!("{}", t.render());

            if let Some(n) = stats.gender_null_count {
                println!();
                println!("There are {} counts of null gender data.", highlight(n));
            }
        }
        None => {
            println!(
                "Sorry, but we do not have any gender data for {}, so we cannot show you counts by gender.",
                city
            );
        }
    }

    println!();
    match &stats.birth_years {
        Some(by) => {
            println!(
                "The earliest birth year of users for this time period is: {}",
                highlight(by.earliest)
            );
            println!(
                "The most recent birth year of users for this time period is: {}",
                highlight(by.most_recent)
            );
            println!(
                "The most common birth year of users for this time period is: {}",
                highlight(by.most_common)
            );
        }
        None => {
            println!("Sorry, but we do not have any birth year data for {}.", city);
        }
    }

    println!();
    println!("{}", elapsed_line(started.elapsed().as_secs_f64()));
    print_separator();

    println!();
    println!("We are now going to display some more statistics.");
    p.checkpoint()
}
