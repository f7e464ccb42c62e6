//! Application configuration from CLI flags and environment.

use clap::{Args, Parser, Subcommand};

use fibprint_cli::OutputFormat;
use fibprint_core::shape::{Square, Triangle};

/// fibprint: Fibonacci sequence printer and shape area calculator.
#[derive(Parser, Debug)]
#[command(name = "fibprint", version, about)]
pub struct AppConfig {
    // Bound for the sequence printer when no subcommand is given
    #[command(flatten)]
    pub fib: FibArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Quiet mode (no interactive prompt).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the Fibonacci terms not exceeding a bound.
    Fib(FibArgs),
    /// Print the area of one or more shapes.
    Area(AreaArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct FibArgs {
    /// Inclusive upper bound. Read from standard input when omitted.
    #[arg(short = 'n', long, env = "FIBPRINT_BOUND", allow_hyphen_values = true)]
    pub bound: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AreaArgs {
    /// Square side length (repeatable).
    #[arg(long, value_name = "SIDE", allow_negative_numbers = true)]
    pub square: Vec<Square>,

    /// Triangle as BASExHEIGHT (repeatable).
    #[arg(long, value_name = "BASExHEIGHT", allow_negative_numbers = true)]
    pub triangle: Vec<Triangle>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The selected tool; the sequence printer when no subcommand is given.
    ///
    /// A bound given before `fib` applies unless `fib` sets its own.
    #[must_use]
    pub fn selected_command(&self) -> Command {
        match &self.command {
            Some(Command::Fib(args)) => Command::Fib(FibArgs {
                bound: args.bound.clone().or_else(|| self.fib.bound.clone()),
            }),
            Some(command) => command.clone(),
            None => Command::Fib(self.fib.clone()),
        }
    }
}

impl AreaArgs {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.square.is_empty() && self.triangle.is_empty()
    }
}
