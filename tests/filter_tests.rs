//! Vocabulary validators and the prompt loop, tested without a terminal.

use bikestats::core::selector::get_filters;
use bikestats::models::city::City;
use bikestats::models::filter::{DayFilter, Month, MonthFilter};
use bikestats::ui::prompt::{Answer, Flow, Prompter, parse_answer};
use chrono::Weekday;
use std::io::Cursor;

#[test]
fn test_city_vocabulary_is_case_and_whitespace_insensitive() {
    assert_eq!(City::from_input("chicago"), Some(City::Chicago));
    assert_eq!(City::from_input("  Chicago  "), Some(City::Chicago));
    assert_eq!(City::from_input("NEW YORK CITY"), Some(City::NewYorkCity));
    assert_eq!(City::from_input("Washington"), Some(City::Washington));

    assert_eq!(City::from_input("springfield"), None);
    assert_eq!(City::from_input("new york"), None);
    assert_eq!(City::from_input(""), None);
}

#[test]
fn test_month_vocabulary_accepts_both_wildcards() {
    assert_eq!(MonthFilter::from_input("all"), Some(MonthFilter::All));
    assert_eq!(MonthFilter::from_input("ALL MONTHS"), Some(MonthFilter::All));
    assert_eq!(
        MonthFilter::from_input(" June "),
        Some(MonthFilter::Month(Month::June))
    );
    assert_eq!(
        MonthFilter::from_input("january"),
        Some(MonthFilter::Month(Month::January))
    );

    // Only the first six calendar months belong to the vocabulary.
    assert_eq!(MonthFilter::from_input("july"), None);
    assert_eq!(MonthFilter::from_input("december"), None);
    assert_eq!(MonthFilter::from_input("jun"), None);
}

#[test]
fn test_month_numbers_are_one_based() {
    assert_eq!(Month::January.number(), 1);
    assert_eq!(Month::June.number(), 6);
}

#[test]
fn test_day_vocabulary_needs_full_names() {
    assert_eq!(
        DayFilter::from_input("monday"),
        Some(DayFilter::Day(Weekday::Mon))
    );
    assert_eq!(
        DayFilter::from_input(" SUNDAY "),
        Some(DayFilter::Day(Weekday::Sun))
    );
    assert_eq!(DayFilter::from_input("all"), Some(DayFilter::All));

    assert_eq!(DayFilter::from_input("mon"), None);
    assert_eq!(DayFilter::from_input("weekday"), None);
}

#[test]
fn test_answer_tokens() {
    assert_eq!(parse_answer("yes"), Some(Answer::Yes));
    assert_eq!(parse_answer("Yes"), Some(Answer::Yes));
    assert_eq!(parse_answer(" y "), Some(Answer::Yes));
    assert_eq!(parse_answer("no"), Some(Answer::No));
    assert_eq!(parse_answer("No"), Some(Answer::No));
    assert_eq!(parse_answer("N"), Some(Answer::No));

    assert_eq!(parse_answer("ok"), None);
    assert_eq!(parse_answer("yep"), None);
    assert_eq!(parse_answer(""), None);
}

#[test]
fn test_checkpoint_survives_consecutive_invalid_answers() {
    let mut p = Prompter::new(Cursor::new("huh\nwhat\nmaybe\nyes\n"));
    assert_eq!(p.checkpoint().unwrap(), Flow::Continue);

    let mut p = Prompter::new(Cursor::new("huh\nwhat\nmaybe\nn\n"));
    assert_eq!(p.checkpoint().unwrap(), Flow::Quit);
}

#[test]
fn test_checkpoint_treats_end_of_input_as_quit() {
    let mut p = Prompter::new(Cursor::new(""));
    assert_eq!(p.checkpoint().unwrap(), Flow::Quit);

    // Invalid answers followed by end of input must not loop forever.
    let mut p = Prompter::new(Cursor::new("huh\nwhat\n"));
    assert_eq!(p.checkpoint().unwrap(), Flow::Quit);
}

#[test]
fn test_selector_only_returns_vocabulary_values() {
    let script = "bogus town\nchicago\nsometime\nmarch\nsomeday\nfriday\nyes\n";
    let mut p = Prompter::new(Cursor::new(script));

    let filter = get_filters(&mut p).unwrap().expect("filter selected");
    assert_eq!(filter.city, City::Chicago);
    assert_eq!(filter.month, MonthFilter::Month(Month::March));
    assert_eq!(filter.day, DayFilter::Day(Weekday::Fri));
}

#[test]
fn test_selector_quits_on_negative_checkpoint() {
    let mut p = Prompter::new(Cursor::new("washington\nall\nall\nno\n"));
    assert!(get_filters(&mut p).unwrap().is_none());
}
