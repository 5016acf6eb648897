pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::print_separator;
pub use formatting::secs_to_readable;
