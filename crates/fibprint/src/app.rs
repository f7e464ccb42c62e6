//! Application entry point and dispatch.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;

use fibprint_cli::output::OutputFormat;
use fibprint_cli::presenter::{presenter_for, ResultPresenter};
use fibprint_core::bound::Bound;
use fibprint_core::constants::{exit_codes, PROMPT};
use fibprint_core::sequence::BoundedSequence;
use fibprint_core::shape::{demo_shapes, Shape};

use crate::config::{AppConfig, AreaArgs, Command, FibArgs};
use crate::errors::handle_error;
use crate::version::full_version;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    tracing::debug!(version = %full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibprint_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter = presenter_for(config.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.selected_command() {
        Command::Fib(args) => {
            let stdin = io::stdin();
            let prompt = !config.quiet
                && config.format == OutputFormat::Text
                && stdin.is_terminal();
            run_fib(&args, prompt, presenter.as_ref(), &mut stdin.lock(), &mut out)
        }
        Command::Area(args) => {
            run_area(&args, presenter.as_ref(), &mut out)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Read the bound, then print the sequence or the too-low message.
///
/// The bound comes from `args` when given, otherwise from one line of `input`.
/// A parse failure is reported through the presenter and mapped to an exit
/// code; only I/O failures are returned as errors.
pub fn run_fib(
    args: &FibArgs,
    prompt: bool,
    presenter: &dyn ResultPresenter,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<i32> {
    let raw = match &args.bound {
        Some(bound) => bound.clone(),
        None => read_bound(input, out, prompt)?,
    };

    let bound = match Bound::parse(&raw) {
        Ok(bound) => bound,
        Err(err) => {
            tracing::debug!(error = %err, "rejected bound");
            presenter.present_error(&err.to_string());
            return Ok(handle_error(&err));
        }
    };

    match bound {
        Bound::TooLow(value) => {
            tracing::debug!(bound = %value, "bound too low");
            presenter.present_too_low(out, &value)?;
        }
        Bound::Limit(limit) => {
            let count = presenter.present_sequence(out, BoundedSequence::new(limit))?;
            tracing::debug!(terms = count, "sequence printed");
        }
    }
    out.flush()?;
    Ok(exit_codes::SUCCESS)
}

/// Print the area of every requested shape, or of the demo shapes.
pub fn run_area(
    args: &AreaArgs,
    presenter: &dyn ResultPresenter,
    out: &mut dyn Write,
) -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = if args.is_empty() {
        demo_shapes()
    } else {
        args.square
            .iter()
            .map(|s| Box::new(*s) as Box<dyn Shape>)
            .chain(args.triangle.iter().map(|t| Box::new(*t) as Box<dyn Shape>))
            .collect()
    };

    for shape in &shapes {
        tracing::debug!(shape = shape.name(), "computing area");
        presenter.present_area(out, shape.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

fn read_bound(input: &mut dyn BufRead, out: &mut dyn Write, prompt: bool) -> io::Result<String> {
    if prompt {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    // Invalid UTF-8 is left for the bound parser to reject
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibprint_cli::presenter::{JsonPresenter, TextPresenter};
    use fibprint_core::constants::TOO_LOW_MESSAGE;
    use fibprint_core::shape::{Square, Triangle};

    fn fib(bound: Option<&str>, stdin: &str, prompt: bool) -> (i32, String) {
        let args = FibArgs {
            bound: bound.map(str::to_string),
        };
        let mut input = stdin.as_bytes();
        let mut out = Vec::new();
        let code = run_fib(&args, prompt, &TextPresenter, &mut input, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn fib_from_flag() {
        assert_eq!(fib(Some("10"), "", false), (0, String::from("1, 2, 3, 5, 8\n")));
    }

    #[test]
    fn fib_from_stdin() {
        assert_eq!(fib(None, "1\n", false), (0, String::from("1\n")));
    }

    #[test]
    fn fib_prompt_precedes_sequence() {
        let (code, out) = fib(None, "7\n", true);
        assert_eq!(code, 0);
        assert_eq!(out, format!("{PROMPT}1, 2, 3, 5\n"));
    }

    #[test]
    fn fib_too_low() {
        for raw in ["0", "-12"] {
            let (code, out) = fib(Some(raw), "", false);
            assert_eq!(code, 0);
            assert_eq!(out, format!("{TOO_LOW_MESSAGE}\n"));
        }
    }

    #[test]
    fn fib_parse_error_prints_nothing_to_stdout() {
        let (code, out) = fib(None, "seven\n", false);
        assert_eq!(code, exit_codes::ERROR_GENERIC);
        assert!(out.is_empty());
    }

    #[test]
    fn fib_invalid_utf8_is_parse_error() {
        let args = FibArgs::default();
        let mut input: &[u8] = &[0xff, 0xfe, b'7', b'\n'];
        let mut out = Vec::new();
        let code = run_fib(&args, false, &TextPresenter, &mut input, &mut out).unwrap();
        assert_eq!(code, exit_codes::ERROR_GENERIC);
        assert!(out.is_empty());
    }

    #[test]
    fn fib_empty_stdin_is_parse_error() {
        let (code, out) = fib(None, "", false);
        assert_eq!(code, exit_codes::ERROR_GENERIC);
        assert!(out.is_empty());
    }

    #[test]
    fn area_defaults_to_demo_shapes() {
        let mut out = Vec::new();
        run_area(&AreaArgs::default(), &TextPresenter, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Area: 100\nArea: 55\n");
    }

    #[test]
    fn area_squares_then_triangles() {
        let args = AreaArgs {
            square: vec![Square::new(3.0)],
            triangle: vec![Triangle::new(4.0, 5.0), Triangle::new(1.0, 1.0)],
        };
        let mut out = Vec::new();
        run_area(&args, &TextPresenter, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Area: 9\nArea: 10\nArea: 0.5\n"
        );
    }

    #[test]
    fn area_json_lines() {
        let mut out = Vec::new();
        run_area(&AreaArgs::default(), &JsonPresenter, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["shape"], "square");
        assert_eq!(lines[1]["area"], 55.0);
    }
}
