//! Session driver: one full pass of selector → loader → raw view → the four
//! statistics stages, then the restart prompt. This is the only place that
//! acts on `Flow::Quit`.

use crate::config::Config;
use crate::core::{raw_view, selector, stats};
use crate::data::loader;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::{Answer, Flow, Prompter};
use crate::utils::formatting::print_separator;
use std::io::BufRead;

pub fn run<R: BufRead>(cfg: &Config, p: &mut Prompter<R>) -> AppResult<()> {
    loop {
        let Some(filter) = selector::get_filters(p)? else {
            break;
        };
        println!();
        print_separator();

        let table = loader::load(cfg, &filter)?;
        info(format!(
            "Loaded {} trips for {} (month: {}, day: {}).",
            table.len(),
            filter.city.title(),
            filter.month,
            filter.day
        ));

        if raw_view::run(&table, p)? == Flow::Quit {
            break;
        }
        if stats::time::run(&table, &filter, p)? == Flow::Quit {
            break;
        }
        if stats::station::run(&table, p)? == Flow::Quit {
            break;
        }
        if stats::duration::run(&table, p)? == Flow::Quit {
            break;
        }
        if stats::user::run(&table, &filter, p)? == Flow::Quit {
            break;
        }

        println!();
        println!("Thank you for your interest in the Bike Share Data!");
        println!();
        match p.ask_yes_no("Would you like to restart? Enter yes or no.")? {
            Answer::Yes => continue,
            Answer::No => break,
        }
    }

    println!();
    println!("Goodbye!");
    Ok(())
}
