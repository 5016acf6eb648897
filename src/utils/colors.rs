/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Highlight a statistic value inside a sentence.
pub fn highlight<T: std::fmt::Display>(value: T) -> String {
    format!("{GREEN}{value}{RESET}")
}
