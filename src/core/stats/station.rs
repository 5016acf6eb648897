//! Most popular stations and station pairs, with the optional
//! least-frequent-pairs sub-view.

use crate::core::stats::{count_values, mode_of};
use crate::errors::AppResult;
use crate::models::trip::TripTable;
use crate::ui::messages::header;
use crate::ui::prompt::{Answer, Flow, Prompter};
use crate::utils::colors::highlight;
use crate::utils::formatting::{elapsed_line, print_separator};
use crate::utils::table::Table;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::time::Instant;

/// How many least-frequent pairs the sub-view shows at most.
pub const LEAST_FREQUENT_LIMIT: usize = 20;

#[derive(Debug)]
pub struct StationStats {
    pub common_start: Option<(String, usize)>,
    pub common_end: Option<(String, usize)>,
    pub common_pair: Option<((String, String), usize)>,
}

pub fn compute(table: &TripTable) -> StationStats {
    let starts = count_values(table.trips.iter().map(|t| t.start_station.clone()));
    let ends = count_values(table.trips.iter().map(|t| t.end_station.clone()));
    let pairs = pair_counts(table);

    StationStats {
        common_start: mode_of(&starts).map(|(s, n)| (s.clone(), n)),
        common_end: mode_of(&ends).map(|(s, n)| (s.clone(), n)),
        common_pair: mode_of(&pairs).map(|(p, n)| (p.clone(), n)),
    }
}

/// Occurrence count per (start, end) station pair, keyed in pair order.
pub fn pair_counts(table: &TripTable) -> BTreeMap<(String, String), usize> {
    count_values(
        table
            .trips
            .iter()
            .map(|t| (t.start_station.clone(), t.end_station.clone())),
    )
}

/// Up to `limit` pairs in ascending count order; equal counts keep pair
/// order. Fewer are returned when fewer distinct pairs exist.
pub fn least_frequent_pairs(table: &TripTable, limit: usize) -> Vec<((String, String), usize)> {
    let mut pairs: Vec<_> = pair_counts(table).into_iter().collect();
    pairs.sort_by_key(|&(_, n)| n);
    pairs.truncate(limit);
    pairs
}

fn render_pair_table(pairs: &[((String, String), usize)]) -> String {
    let mut t = Table::new(vec!["Start Station", "End Station", "Trips"]);
    for ((start, end), n) in pairs {
        t.add_row(vec![start.clone(), end.clone(), n.to_string()]);
    }
    t.render()
}

pub fn run<R: BufRead>(table: &TripTable, p: &mut Prompter<R>) -> AppResult<Flow> {
    header("Calculating The Most Popular Stations and Trip...");
    let started = Instant::now();

    let stats = compute(table);

    println!();
    match &stats.common_start {
        Some((station, _)) => println!(
            "The most common start station for your selection of month and day is {}",
            highlight(station)
        ),
        None => println!("No trips matched your filter."),
    }

    println!();
    if let Some((station, _)) = &stats.common_end {
        println!(
            "The most common end station for your selection of month and day is {}",
            highlight(station)
        );
    }

    println!();
    if let Some(((start, end), n)) = &stats.common_pair {
        println!("The most frequent combination of start station and end station is");
        println!("  {} -> {} ({} trips)", highlight(start), highlight(end), n);
    }

    println!();
    println!("{}", elapsed_line(started.elapsed().as_secs_f64()));
    print_separator();

    // Least-frequent sub-view: its own yes/no loop, with the shared
    // checkpoint after each displayed table.
    loop {
        println!();
        let answer = p.ask_yes_no(
            "Would you like to see the top 20 (if available) least frequent Start and End Station combinations? Yes or No:",
        )?;

        match answer {
            Answer::No => {
                println!();
                println!("Okay, we will move on to the next section!");
                break;
            }
            Answer::Yes => {
                let pairs = least_frequent_pairs(table, LEAST_FREQUENT_LIMIT);
                println!();
                println!("The least frequent start and end station combinations are:");
                println!();
                print!("{}", render_pair_table(&pairs));

                println!();
                println!("We are now going to display some more statistics.");
                if p.checkpoint()? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }
    }

    Ok(Flow::Continue)
}
