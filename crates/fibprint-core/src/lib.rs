//! # fibprint-core
//!
//! Domain library for the fibprint console tools: a bounded Fibonacci
//! sequence generator and a polymorphic shape-area capability.

pub mod bound;
pub mod constants;
pub mod sequence;
pub mod shape;

// Re-exports
pub use bound::{Bound, InputError};
pub use constants::{exit_codes, PROMPT, TERM_SEPARATOR, TOO_LOW_MESSAGE};
pub use sequence::{BoundedSequence, GeneratorState};
pub use shape::{Shape, ShapeParseError, Square, Triangle};

use num_bigint::BigUint;

/// Collect every Fibonacci term not exceeding `limit`.
///
/// Convenience wrapper over [`BoundedSequence`] for callers that do not
/// need to stream terms.
///
/// # Example
/// ```
/// let terms: Vec<String> = fibprint_core::sequence_up_to(20u32.into())
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(terms, ["1", "2", "3", "5", "8", "13"]);
/// ```
#[must_use]
pub fn sequence_up_to(limit: BigUint) -> Vec<BigUint> {
    BoundedSequence::new(limit).collect()
}
