//! Error type for the fallible sort family ([`crate::try_sort`], [`crate::try_sort_by`]).

use core::fmt::{Display, Formatter, Result};

/// Some pair of elements had no defined ordering (e.g. a NaN among floats).
///
/// The sort still ran to completion, so the slice holds a permutation of its input, but the order
/// of that permutation is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incomparable {
    /// Number of comparisons that returned no ordering.
    pub failures: usize,
}

impl Display for Incomparable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "incomparable elements: {} comparison(s) had no ordering", self.failures)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Incomparable {}
