//! Line-oriented stdin prompts and user-facing messages.
//!
//! The menu loop runs in the normal terminal screen, so everything here is
//! plain stdout/stdin. Inputs come back as trimmed strings with no
//! validation; empty or nonsensical values flow through to the query engine,
//! which answers them with empty results.

use std::io::{self, BufRead, Write};

/// Print a message for the user.
pub fn display_message(message: &str) {
    println!("{message}");
}

/// Print an error message for the user.
pub fn display_error(message: &str) {
    println!("Error: {message}");
}

/// Show `label` and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    read_trimmed(&mut io::stdin().lock())
}

/// Prompt the user for a park name.
pub fn get_park_name() -> io::Result<String> {
    prompt("Enter park name: ")
}

/// Prompt the user for a reviewer location.
pub fn get_location_name() -> io::Result<String> {
    prompt("Enter reviewer location: ")
}

/// Prompt the user for a year.
pub fn get_year() -> io::Result<String> {
    prompt("Enter year (e.g., 2023): ")
}

/// Prompt the user for the export format, lowercased.
pub fn get_export_format() -> io::Result<String> {
    Ok(prompt("Enter the format (txt, csv, json): ")?.to_lowercase())
}

/// Prompt the user for the export filename.
pub fn get_filename() -> io::Result<String> {
    prompt("Enter the filename: ")
}

/// Read one line from `input` and trim surrounding whitespace.
///
/// End of input is reported as [`io::ErrorKind::UnexpectedEof`]; the menu
/// loops treat it like the exit choice so a closed stdin cannot spin.
fn read_trimmed(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
