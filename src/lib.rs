//! bikestats library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::{AppError, AppResult};
use std::io;
use ui::prompt::Prompter;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // An interrupt anywhere in the session becomes a graceful exit. This is
    // the one termination path not routed through Flow::Quit.
    ctrlc::set_handler(|| {
        println!();
        println!("You've chosen to leave the program. Goodbye!");
        std::process::exit(0);
    })
    .map_err(|e| AppError::Other(e.to_string()))?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());
    core::session::run(&cfg, &mut prompter)
}
