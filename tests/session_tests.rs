use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bks, setup_data_dir};

#[test]
fn test_full_session_unfiltered_chicago() {
    let data_dir = setup_data_dir("full_session");

    // city, month, day, continue, view raw, one more page (the 2-row
    // tail), stop paging, then yes through every checkpoint (showing the
    // least-frequent table once) and decline the restart.
    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nyes\nyes\nyes\nno\nyes\nyes\nyes\nno\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Loaded 7 trips for Chicago"))
        .stdout(contains("2017-06-05 08:00:00"))
        .stdout(contains("2017-01-08 17:00:00"))
        .stdout(contains("The most common month for bikeshare use was:"))
        .stdout(contains("June"))
        .stdout(contains("The most common day of the week for bikeshare use was:"))
        .stdout(contains("Monday"))
        .stdout(contains("The most common start hour for bikeshare use was:"))
        .stdout(contains("The most common start station for your selection of month and day is"))
        .stdout(contains("A St"))
        .stdout(contains("B St"))
        .stdout(contains("The least frequent start and end station combinations are:"))
        .stdout(contains("C St"))
        .stdout(contains("The total travel time in seconds was"))
        .stdout(contains("2800"))
        .stdout(contains("0 days, 0 hours, 46 minutes, and 40 seconds"))
        .stdout(contains("0 days, 0 hours, 06 minutes, and 40 seconds"))
        .stdout(contains("Subscriber"))
        .stdout(contains("Male"))
        .stdout(contains("There are"))
        .stdout(contains("counts of null gender data."))
        .stdout(contains("The earliest birth year of users for this time period is:"))
        .stdout(contains("1961"))
        .stdout(contains("1999"))
        .stdout(contains("1989"))
        .stdout(contains("Thank you for your interest in the Bike Share Data!"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_invalid_entries_reprompt_until_valid() {
    let data_dir = setup_data_dir("invalid_entries");

    // Garbage before each valid answer; day filter set so the day statistic
    // is suppressed. Quit at the time-stats checkpoint.
    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("springfield\nchicago\ndecember\nall months\nnotaday\nmonday\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains(
            "That is not a valid entry. Please enter either Chicago, New York City, or Washington.",
        ))
        .stdout(contains(
            "That is not a valid entry. Please select one of the month options available.",
        ))
        .stdout(contains(
            "That is not a valid entry. Please select one of the day options available.",
        ))
        .stdout(contains("Loaded 5 trips for Chicago"))
        .stdout(contains("You filtered by Monday, so we can't show the most common day."))
        .stdout(contains("June"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_month_filter_suppresses_month_statistic() {
    let data_dir = setup_data_dir("month_filter");

    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\njune\nall\nyes\nno\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Loaded 5 trips for Chicago"))
        .stdout(contains("You filtered the data by June, so we can't show the most common month."))
        .stdout(contains("Monday"))
        .stdout(contains("1500"))
        .stdout(contains("0 days, 0 hours, 05 minutes, and 00 seconds"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_washington_has_no_demographics() {
    let data_dir = setup_data_dir("washington");

    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("washington\nall\nall\nyes\nno\nyes\nno\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Loaded 3 trips for Washington"))
        .stdout(contains(
            "Sorry, but we do not have any gender data for Washington, so we cannot show you counts by gender.",
        ))
        .stdout(contains("Sorry, but we do not have any birth year data for Washington."))
        .stdout(contains("Subscriber"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_negative_checkpoint_quits_cleanly() {
    let data_dir = setup_data_dir("early_quit");

    // Decline the checkpoint right after picking the filters: the session
    // ends before any data is loaded.
    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nno\n")
        .assert()
        .success()
        .stdout(contains("Goodbye!"))
        .stdout(contains("Loaded").not());
}

#[test]
fn test_restart_runs_a_second_pass() {
    let data_dir = setup_data_dir("restart");

    let mut stdin = String::new();
    // First pass, raw view declined, everything else affirmed.
    stdin.push_str("washington\nall\nall\nyes\nno\nyes\nno\nyes\nyes\n");
    // Restart, then quit at the post-filter checkpoint of the second pass.
    stdin.push_str("yes\nchicago\nall\nall\nno\n");

    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US Bike Share data!").count(2))
        .stdout(contains("Goodbye!"));
}

#[test]
fn test_missing_city_file_is_fatal() {
    let data_dir = setup_data_dir("missing_file");
    std::fs::remove_file(std::path::Path::new(&data_dir).join("chicago.csv")).unwrap();

    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nyes\n")
        .assert()
        .failure()
        .stderr(contains("Cannot read trip data for Chicago"));
}

#[test]
fn test_closed_stdin_never_hangs() {
    let data_dir = setup_data_dir("closed_stdin");

    // Input ends mid-selection: the program treats end-of-input as a quit
    // request instead of re-prompting forever.
    bks()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\n")
        .assert()
        .success()
        .stdout(contains("Goodbye!"));
}
