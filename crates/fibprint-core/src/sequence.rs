//! Lazy generator for Fibonacci terms up to an inclusive bound.

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::bound::Bound;

/// Lifecycle of a [`BoundedSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// More terms may still fit under the bound.
    Generating,
    /// The next term would exceed the bound, or the bound was below 1.
    Done,
}

/// Iterator over the increasing Fibonacci terms not exceeding a limit.
///
/// Keeps the running pair `(p, q)` starting at `(0, 1)`. Each step adds the
/// pair and stores the sum in whichever value is smaller, then yields it.
/// Generation stops once `p + q` would exceed the limit.
///
/// # Example
/// ```
/// use fibprint_core::sequence::BoundedSequence;
/// use num_bigint::BigUint;
/// let terms: Vec<String> = BoundedSequence::new(BigUint::from(10u32))
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(terms, ["1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedSequence {
    p: BigUint,
    q: BigUint,
    limit: BigUint,
    state: GeneratorState,
    emitted: u64,
}

impl BoundedSequence {
    #[must_use]
    pub fn new(limit: BigUint) -> Self {
        let state = if limit.is_zero() {
            GeneratorState::Done
        } else {
            GeneratorState::Generating
        };
        Self {
            p: BigUint::zero(),
            q: BigUint::one(),
            limit,
            state,
            emitted: 0,
        }
    }

    /// Build a generator for a parsed bound. Too-low bounds start `Done`.
    #[must_use]
    pub fn from_bound(bound: &Bound) -> Self {
        match bound.limit() {
            Some(limit) => Self::new(limit.clone()),
            None => Self::new(BigUint::zero()),
        }
    }

    #[must_use]
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    #[must_use]
    pub fn limit(&self) -> &BigUint {
        &self.limit
    }

    /// Number of terms yielded so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// The value the next step would produce: `p + q`.
    ///
    /// Once the generator is `Done` this is the first term above the limit.
    #[must_use]
    pub fn pending_term(&self) -> BigUint {
        &self.p + &self.q
    }
}

impl Iterator for BoundedSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == GeneratorState::Done {
            return None;
        }

        let sum = self.pending_term();
        if sum > self.limit {
            self.state = GeneratorState::Done;
            tracing::debug!(limit = %self.limit, terms = self.emitted, "sequence complete");
            return None;
        }

        let term = if self.p < self.q {
            self.p = sum;
            self.p.clone()
        } else {
            self.q = sum;
            self.q.clone()
        };
        self.emitted += 1;
        tracing::trace!(term = %term, "generated term");
        Some(term)
    }
}

impl FusedIterator for BoundedSequence {}
