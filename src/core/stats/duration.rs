//! Total and average trip duration.

use crate::errors::AppResult;
use crate::models::trip::TripTable;
use crate::ui::messages::header;
use crate::ui::prompt::{Flow, Prompter};
use crate::utils::colors::highlight;
use crate::utils::formatting::{elapsed_line, print_separator, secs_to_readable};
use std::io::BufRead;
use std::time::Instant;

#[derive(Debug)]
pub struct DurationStats {
    pub total_secs: i64,
    pub mean_secs: f64,
    pub count: usize,
}

pub fn compute(table: &TripTable) -> DurationStats {
    let total_secs: i64 = table.trips.iter().map(|t| t.duration_secs).sum();
    let count = table.len();
    let mean_secs = if count == 0 {
        0.0
    } else {
        total_secs as f64 / count as f64
    };

    DurationStats {
        total_secs,
        mean_secs,
        count,
    }
}

pub fn run<R: BufRead>(table: &TripTable, p: &mut Prompter<R>) -> AppResult<Flow> {
    header("Calculating Trip Duration...");
    let started = Instant::now();

    let stats = compute(table);

    if stats.count == 0 {
        println!();
        println!("No trips matched your filter.");
    } else {
        println!();
        println!(
            "The total travel time in seconds was {}.",
            highlight(stats.total_secs)
        );
        println!(
            "The total travel time for the period you selected was {}.",
            secs_to_readable(stats.total_secs.max(0) as u64)
        );

        println!();
        println!(
            "The mean travel time in seconds was {}.",
            highlight(format!("{:.2}", stats.mean_secs))
        );
        // The readable form is truncated to whole seconds.
        println!(
            "The mean travel time for the period you selected was {}.",
            secs_to_readable(stats.mean_secs.max(0.0) as u64)
        );
    }

    println!();
    println!("{}", elapsed_line(started.elapsed().as_secs_f64()));
    print_separator();

    println!();
    println!("We are now going to display some more statistics.");
    p.checkpoint()
}
