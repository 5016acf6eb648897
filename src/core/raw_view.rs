//! Raw data viewer: pages the filtered table five rows at a time. The
//! pager's yes/no answers are local — a negative here moves on to the
//! statistics rather than quitting the session.

use crate::errors::AppResult;
use crate::models::trip::{Trip, TripTable};
use crate::ui::messages::warning;
use crate::ui::prompt::{Answer, Flow, Prompter};
use crate::utils::table::Table;
use std::io::BufRead;

pub const PAGE_SIZE: usize = 5;

/// The page starting at `offset`. Fewer than PAGE_SIZE rows (or none) come
/// back past the end of the table.
pub fn page(trips: &[Trip], offset: usize) -> &[Trip] {
    let start = offset.min(trips.len());
    let end = offset.saturating_add(PAGE_SIZE).min(trips.len());
    &trips[start..end]
}

fn render_page(table: &TripTable, rows: &[Trip]) -> String {
    let mut headers = vec![
        "Start Time",
        "End Time",
        "Start Station",
        "End Station",
        "Duration (s)",
        "User Type",
    ];
    if table.has_gender {
        headers.push("Gender");
    }
    if table.has_birth_year {
        headers.push("Birth Year");
    }

    let mut t = Table::new(headers);
    for trip in rows {
        let mut row = vec![
            trip.start_str(),
            trip.end_str(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.duration_secs.to_string(),
            trip.user_type
                .map(|u| u.ut_as_str().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ];
        if table.has_gender {
            row.push(
                trip.gender
                    .map(|g| g.g_as_str().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        if table.has_birth_year {
            row.push(
                trip.birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        t.add_row(row);
    }
    t.render()
}

fn show(table: &TripTable, offset: usize) {
    let rows = page(&table.trips, offset);
    if rows.is_empty() {
        println!();
        warning("There are no more rows to display.");
    } else {
        println!();
        print!("{}", render_page(table, rows));
    }
}

pub fn run<R: BufRead>(table: &TripTable, p: &mut Prompter<R>) -> AppResult<Flow> {
    println!();
    let answer =
        p.ask_yes_no("Would you like to view 5 rows of individual trip data? Enter yes or no")?;

    if answer == Answer::No {
        println!();
        println!("Okay, we will move on to the next section!");
        return Ok(Flow::Continue);
    }

    let mut offset = 0;
    show(table, offset);

    loop {
        offset += PAGE_SIZE;
        println!();
        let more = p.ask_yes_no("Do you wish to continue viewing 5 additional rows of data?")?;

        match more {
            Answer::Yes => show(table, offset),
            Answer::No => {
                println!();
                println!("Okay, you will now move on to the next section!");
                break;
            }
        }
    }

    Ok(Flow::Continue)
}
