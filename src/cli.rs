use clap::Parser;

/// Command-line interface definition for bikestats.
/// The program itself is a single interactive session, so there are no
/// subcommands, only session-wide overrides.
#[derive(Parser)]
#[command(
    name = "bikestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: filter by city, month and weekday, then browse usage statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the directory containing the city CSV files (useful for
    /// tests or custom datasets)
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,
}
