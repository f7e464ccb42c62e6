//! Messages and exit codes shared by the library and the binary.

/// Printed instead of a sequence when the bound is below 1.
pub const TOO_LOW_MESSAGE: &str = "Given number is too low, no sequence can be generated.";

/// Prompt shown before reading the bound from an interactive terminal.
pub const PROMPT: &str = "Enter number to calculate: ";

/// Separator written between sequence terms.
pub const TERM_SEPARATOR: &str = ", ";

/// Side length of the demo square printed by `area` when no shapes are given.
pub const DEMO_SQUARE_SIDE: f64 = 10.0;

/// Base and height of the demo triangle printed by `area` when no shapes are given.
pub const DEMO_TRIANGLE: (f64, f64) = (10.0, 11.0);

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including the too-low branch.
    pub const SUCCESS: i32 = 0;
    /// Input could not be parsed, or another runtime failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Command-line usage error (reported by clap).
    pub const ERROR_USAGE: i32 = 2;
}
