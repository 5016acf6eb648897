#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikestats")
}

/// Chicago fixture: 7 trips, June-heavy, Monday-heavy, 08:xx-heavy, with the
/// demographic columns and a dominant A St -> B St pair.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-06-05 08:00:00,2017-06-05 08:01:40,100,A St,B St,Subscriber,Male,1989.0
1,2017-06-05 08:30:00,2017-06-05 08:33:20,200,A St,B St,Subscriber,Male,1989.0
2,2017-06-12 08:15:00,2017-06-12 08:20:00,300,A St,B St,Customer,Female,1961.0
3,2017-06-19 09:00:00,2017-06-19 09:06:40,400,C St,D St,Subscriber,Male,1999.0
4,2017-06-06 10:00:00,2017-06-06 10:08:20,500,E St,F St,Customer,Female,1975.0
5,2017-01-02 08:45:00,2017-01-02 08:55:00,600,A St,B St,Subscriber,Male,1982.0
6,2017-01-08 17:00:00,2017-01-08 17:11:40,700,G St,H St,Customer,Female,1990.0
";

/// New York City fixture: small, with a missing gender entry.
pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-02-06 12:00:00,2017-02-06 12:10:00,600,N1 Ave,N2 Ave,Subscriber,Female,1992.0
1,2017-02-07 13:00:00,2017-02-07 13:05:00,300,N2 Ave,N1 Ave,Customer,,
";

/// Washington fixture: no Gender or Birth Year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 07:00:00,2017-03-06 07:01:00,60,W1 Plaza,W2 Plaza,Subscriber
1,2017-03-07 07:30:00,2017-03-07 07:32:00,120,W1 Plaza,W2 Plaza,Customer
2,2017-03-08 08:00:00,2017-03-08 08:03:00,180,W3 Plaza,W4 Plaza,Subscriber
";

/// Create a unique fixture data dir inside the system temp dir, holding the
/// three city CSVs, and return its path.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats", name));

    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fixture dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago fixture");
    fs::write(path.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc fixture");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington fixture");

    path.to_string_lossy().to_string()
}
