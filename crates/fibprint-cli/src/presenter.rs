//! Result presenters for the sequence and area tools.

use std::io::{self, Write};

use num_bigint::{BigInt, BigUint};

use fibprint_core::constants::TOO_LOW_MESSAGE;
use fibprint_core::sequence::BoundedSequence;
use fibprint_core::shape::Shape;

use crate::output::{
    format_area, write_json_line, write_terms, AreaReport, OutputFormat, SequenceReport,
    TooLowReport,
};
use crate::ui::print_error;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the terms of a sequence. Returns the number of terms written.
    fn present_sequence(&self, out: &mut dyn Write, sequence: BoundedSequence) -> io::Result<u64>;

    /// Present a bound below 1.
    fn present_too_low(&self, out: &mut dyn Write, value: &BigInt) -> io::Result<()>;

    /// Present the area of one shape.
    fn present_area(&self, out: &mut dyn Write, shape: &dyn Shape) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Plain text presenter. Terms are streamed as they are generated.
pub struct TextPresenter;

impl ResultPresenter for TextPresenter {
    fn present_sequence(&self, out: &mut dyn Write, sequence: BoundedSequence) -> io::Result<u64> {
        write_terms(out, sequence)
    }

    fn present_too_low(&self, out: &mut dyn Write, _value: &BigInt) -> io::Result<()> {
        writeln!(out, "{TOO_LOW_MESSAGE}")
    }

    fn present_area(&self, out: &mut dyn Write, shape: &dyn Shape) -> io::Result<()> {
        writeln!(out, "{}", format_area(shape.area()))
    }
}

/// JSON presenter. Each result is one JSON object on its own line.
pub struct JsonPresenter;

impl ResultPresenter for JsonPresenter {
    fn present_sequence(&self, out: &mut dyn Write, sequence: BoundedSequence) -> io::Result<u64> {
        let bound = sequence.limit().to_string();
        let terms: Vec<String> = sequence.map(|t: BigUint| t.to_string()).collect();
        let count = terms.len() as u64;
        write_json_line(out, &SequenceReport { bound, terms })?;
        Ok(count)
    }

    fn present_too_low(&self, out: &mut dyn Write, value: &BigInt) -> io::Result<()> {
        write_json_line(
            out,
            &TooLowReport {
                bound: value.to_string(),
                too_low: true,
                message: TOO_LOW_MESSAGE,
            },
        )
    }

    fn present_area(&self, out: &mut dyn Write, shape: &dyn Shape) -> io::Result<()> {
        write_json_line(
            out,
            &AreaReport {
                shape: shape.name(),
                area: shape.area(),
            },
        )
    }
}

/// Select the presenter for an output format.
#[must_use]
pub fn presenter_for(format: OutputFormat) -> Box<dyn ResultPresenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter),
        OutputFormat::Json => Box::new(JsonPresenter),
    }
}
