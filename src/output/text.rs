//! Human-readable text output
//!
//! Formatting is kept apart from printing so the exact lines can be tested.

use crate::coordinator::{SearchOutcome, SearchReport};
use crate::square::Square;
use crate::util::time::seconds;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Startup banner: program name, start time, worker count
pub fn banner_lines<Tz>(started: &DateTime<Tz>, cores: usize) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    vec![
        "Magic square!".to_string(),
        format!("Started {} using {} cores", started.format("%a %b %e %T %Y"), cores),
    ]
}

/// Completion report: total tries, elapsed seconds, tries per second
///
/// The solution itself is not repeated here; the worker that found it has
/// already printed it.
pub fn report_lines<const N: usize>(report: &SearchReport<N>) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    if report.outcome == SearchOutcome::Exhausted {
        lines.push("No magic square within the trial budget".to_string());
    }

    lines.push(format!("Tries: {}", report.tries));
    lines.push(format!("Time: {:.2} s", seconds(report.elapsed)));
    lines.push(format!("Tries: {} tries / s", report.rate().round() as u64));
    lines.push("Done".to_string());

    lines
}

/// Solution announcement: the grid before squaring, then its magic sum
pub fn found_lines<const N: usize>(square: &Square<N>) -> Vec<String> {
    let mut lines = vec![format!("Found magic {}", square)];
    if let Some(sum) = square.squared().magic_sum() {
        lines.push(format!("Magic square sum {}", sum));
    }
    lines
}

/// Print the solution announcement to stdout in one write
pub fn print_found<const N: usize>(square: &Square<N>) {
    println!("{}", found_lines(square).join("\n"));
}

/// Print the startup banner to stdout
pub fn print_banner<Tz>(started: &DateTime<Tz>, cores: usize)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    for line in banner_lines(started, cores) {
        println!("{}", line);
    }
}

/// Print the completion report to stdout
pub fn print_results<const N: usize>(report: &SearchReport<N>) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}
