#![no_std]
#![deny(missing_docs)]

//! heapsort is a sorting library. It is comparison-based, in-place, and unstable. The following
//! interface is provided:
//!
//! | Family           | Element bound           | Result                       |
//! |------------------|-------------------------|------------------------------|
//! | [`sort`]         | `Ord`                   | none                         |
//! | [`try_sort`]     | `PartialOrd`            | `Result<(), Incomparable>`   |
//!
//! To sort using a comparator, use the `_by` extension and pass a comparison function e.g.
//! [`sort_by`]`(&mut v, cmp)`. This allows you to sort descending and into other desired patterns.
//!
//! To sort by key, use [`sort_by_key`] and pass a mapping e.g. [`sort_by_key`]`(&mut v, f)`. This
//! will sort ascending by key (lowest keys first).
//!
//! The worst-case time complexity is `O(n log n)` and no heap allocation is made. Equal elements
//! may be reordered relative to each other.
//!
//! The ordering given to the infallible family must be total. If it is not, the slice ends up in
//! an unspecified order, though it always remains a permutation of its input. Use [`try_sort`] or
//! [`try_sort_by`] to detect incomparable elements instead.

#[cfg(feature = "std")]
extern crate std;

mod error;

#[cfg(not(feature = "internal"))]
mod heap;

#[cfg(feature = "internal")]
/// Module that exposes the max-heap primitives.
pub mod heap;

pub use error::Incomparable;

use core::cmp::Ordering;

/// Sort `v`.
///
/// This sort is unstable.
#[inline(always)]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp)
}

/// Sort `v` with a comparison function `cmp`.
///
/// This sort is unstable.
#[inline(always)]
pub fn sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    sort_general(v, &mut |x, y| cmp(x, y) == Ordering::Less)
}

/// Sort `v` with a mapping `f` from elements to keys.
///
/// This sort is unstable. `f` is called twice per comparison.
#[inline(always)]
pub fn sort_by_key<T, K: Ord>(v: &mut [T], mut f: impl FnMut(&T) -> K) {
    sort_general(v, &mut |x, y| f(x).lt(&f(y)))
}

/// Sort `v` whose elements are only partially ordered.
///
/// Returns [`Incomparable`] if any comparison had no ordering. The slice is still a permutation of
/// its input in that case, in unspecified order.
#[inline(always)]
pub fn try_sort<T: PartialOrd>(v: &mut [T]) -> Result<(), Incomparable> {
    try_sort_by(v, T::partial_cmp)
}

/// Sort `v` with a partial comparison function `cmp`.
///
/// Comparisons that return `None` are treated as "not less" and counted; see [`try_sort`].
pub fn try_sort_by<T>(
    v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Option<Ordering>,
) -> Result<(), Incomparable> {
    let mut failures = 0;

    sort_general(v, &mut |x, y| match cmp(x, y) {
        Some(ordering) => ordering == Ordering::Less,
        None => {
            failures += 1;
            false
        }
    });

    match failures {
        0 => Ok(()),
        failures => Err(Incomparable { failures }),
    }
}

#[inline(always)]
fn sort_general<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    // Skip zero-sized types
    if core::mem::size_of::<T>() != 0 {
        heap::heap_sort(v, less);
    }
}
