//! Formatting utilities used for CLI output.

/// Decompose a number of seconds into a human-readable sentence fragment.
///
/// Minutes and seconds are zero-padded to two digits, days and hours are not:
/// `90061` → `"1 days, 1 hours, 01 minutes, and 01 seconds"`.
pub fn secs_to_readable(total_secs: u64) -> String {
    let days = total_secs / (24 * 3600);
    let rem = total_secs % (24 * 3600);
    let hours = rem / 3600;
    let rem = rem % 3600;
    let minutes = rem / 60;
    let seconds = rem % 60;

    format!(
        "{} days, {} hours, {:02} minutes, and {:02} seconds",
        days, hours, minutes, seconds
    )
}

/// Horizontal rule printed after each statistics section.
pub fn print_separator() {
    println!("{}", "-".repeat(40));
}

pub fn elapsed_line(secs: f64) -> String {
    format!("This took {:.3} seconds.", secs)
}
