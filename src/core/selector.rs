//! Interactive filter selection: city, month, day. Each prompt validates
//! against its fixed vocabulary and re-prompts indefinitely on anything
//! else; no free text ever leaves this module.

use crate::errors::AppResult;
use crate::models::city::City;
use crate::models::filter::{DayFilter, Filter, MonthFilter};
use crate::ui::messages::success;
use crate::ui::prompt::{Flow, Prompter};
use std::io::BufRead;

pub fn get_filters<R: BufRead>(p: &mut Prompter<R>) -> AppResult<Option<Filter>> {
    println!("Hello! Let's explore some US Bike Share data!");
    println!();
    println!("We will be looking at city-level data for your specified time period.");
    println!();
    println!("You'll be able to view raw data, time stats, station stats, trip duration, and user information.");
    println!();

    let Some(city) = p.ask(
        "Which city would you like to view data for: Chicago, New York City, or Washington?",
        "That is not a valid entry. Please enter either Chicago, New York City, or Washington.",
        City::from_input,
    )?
    else {
        return Ok(None);
    };
    println!();
    success(format!("Great! Let's look at the data for {}.", city.title()));

    println!();
    println!("You can filter the data by month. You can choose from the following: January, February, March, April, May, June, or all months.");
    let Some(month) = p.ask(
        "Which month would you like to filter the data by?",
        "That is not a valid entry. Please select one of the month options available.",
        MonthFilter::from_input,
    )?
    else {
        return Ok(None);
    };

    println!();
    println!("You can filter the data by day. You can choose from the following: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or all.");
    let Some(day) = p.ask(
        "Which day would you like to filter the data by?",
        "That is not a valid entry. Please select one of the day options available.",
        DayFilter::from_input,
    )?
    else {
        return Ok(None);
    };

    println!();
    println!("Thank you for selecting your filters. We are now going to display some relevant data summaries.");

    match p.checkpoint()? {
        Flow::Continue => Ok(Some(Filter { city, month, day })),
        Flow::Quit => Ok(None),
    }
}
