//! Parsing the caller-supplied upper bound.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, ParseBigIntError};
use num_traits::One;

/// Error raised when console input cannot be read as an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The input is not a plain decimal integer.
    #[error("expected an integer, got {input:?}")]
    Parse {
        input: String,
        #[source]
        source: Option<ParseBigIntError>,
    },
}

/// Inclusive upper limit for sequence generation.
///
/// Values below 1 are kept as `TooLow` so the caller can report them
/// instead of generating anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// The bound is zero or negative.
    TooLow(BigInt),
    /// A usable bound, at least 1.
    Limit(BigUint),
}

impl Bound {
    /// Classify an integer as a usable limit or a too-low value.
    #[must_use]
    pub fn new(value: BigInt) -> Self {
        if value < BigInt::one() {
            return Self::TooLow(value);
        }
        match value.to_biguint() {
            Some(limit) => Self::Limit(limit),
            None => Self::TooLow(value),
        }
    }

    /// Parse a bound from one line of input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        // num-bigint accepts `_` between digits; console input does not
        if trimmed.contains('_') {
            return Err(InputError::Parse {
                input: trimmed.to_string(),
                source: None,
            });
        }
        let value = trimmed
            .parse::<BigInt>()
            .map_err(|source| InputError::Parse {
                input: trimmed.to_string(),
                source: Some(source),
            })?;
        Ok(Self::new(value))
    }

    /// The usable limit, or `None` when the bound is too low.
    #[must_use]
    pub fn limit(&self) -> Option<&BigUint> {
        match self {
            Self::Limit(limit) => Some(limit),
            Self::TooLow(_) => None,
        }
    }

    #[must_use]
    pub fn is_too_low(&self) -> bool {
        matches!(self, Self::TooLow(_))
    }
}

impl FromStr for Bound {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for Bound {
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value))
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow(value) => write!(f, "{value}"),
            Self::Limit(limit) => write!(f, "{limit}"),
        }
    }
}
