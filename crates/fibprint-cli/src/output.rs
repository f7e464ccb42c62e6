//! Output formatting and machine-readable reports.

use std::io::{self, Write};

use clap::ValueEnum;
use num_bigint::BigUint;
use serde::Serialize;

use fibprint_core::constants::TERM_SEPARATOR;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// JSON report for a generated sequence.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub bound: String,
    pub terms: Vec<String>,
}

/// JSON report for a bound below 1.
#[derive(Debug, Serialize)]
pub struct TooLowReport<'a> {
    pub bound: String,
    pub too_low: bool,
    pub message: &'a str,
}

/// JSON report for one shape.
#[derive(Debug, Serialize)]
pub struct AreaReport<'a> {
    pub shape: &'a str,
    pub area: f64,
}

/// Format an area line as `Area: <number>`.
///
/// Uses the shortest round-trip decimal form, never an exponent.
#[must_use]
pub fn format_area(area: f64) -> String {
    format!("Area: {area}")
}

/// Write terms as they are produced, separated by `", "` and ended by a newline.
///
/// Returns the number of terms written.
pub fn write_terms<I>(out: &mut dyn Write, terms: I) -> io::Result<u64>
where
    I: IntoIterator<Item = BigUint>,
{
    let mut written = 0u64;
    for term in terms {
        if written > 0 {
            out.write_all(TERM_SEPARATOR.as_bytes())?;
        }
        write!(out, "{term}")?;
        written += 1;
    }
    writeln!(out)?;
    Ok(written)
}

/// Serialize `value` as a single JSON line.
pub fn write_json_line<T: Serialize>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
