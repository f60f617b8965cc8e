//! Max-heap primitives over an implicit binary tree embedded in a slice.
//!
//! The element at index `i` has children at `2 * i + 1` and `2 * i + 2`. Every function takes the
//! ordering as a `less` predicate, so the same code serves [`crate::sort`], [`crate::sort_by`],
//! [`crate::sort_by_key`] and the fallible family.

use core::ptr;

use sort_util::RawMut;

/// Sort `v` with heap sort.
///
/// Cost: `O(n log n)` comparisons and `O(n log n)` swaps, `O(1)` extra space.
#[inline(never)]
pub fn heap_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    let n = v.len();

    build(v, less);

    // `v[i + 1..]` is sorted and every element in it is no less than the heap's root
    for i in (1..n).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, less);
    }
}

/// Rearrange `v` into a max-heap.
///
/// Cost: `O(n)` comparisons and `O(n)` swaps.
pub fn build<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
    // Leaves are already heaps, so start from the last parent
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, less);
    }
}

/// Move the element at `root` down until the max-heap invariant holds at `root`, assuming both
/// subtrees of `root` are max-heaps. Does nothing if `root` is out of range.
///
/// Cost: `O(log n)` comparisons and `O(log n)` swaps.
pub fn sift_down<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], mut root: usize, less: &mut F) {
    let (s, n) = v.raw_mut();

    loop {
        let mut child = match root.checked_mul(2).and_then(|c| c.checked_add(1)) {
            Some(child) if child < n => child,
            _ => return,
        };

        // SAFETY: `root < child < n` and `child + 1` is checked before use, so every pointer stays
        // inside the slice. Each swap completes before the next call to `less`, so a panic
        // leaves `v` a permutation of its input.
        unsafe {
            // Choose the greater child
            if child + 1 < n {
                child += less(&*s.add(child), &*s.add(child + 1)) as usize;
            }

            if !less(&*s.add(root), &*s.add(child)) {
                return;
            }

            ptr::swap(s.add(root), s.add(child));
        }

        root = child;
    }
}

/// Return `true` iff no element of `v` is less than either of its children.
#[cfg_attr(not(feature = "internal"), allow(dead_code))]
pub fn is_heap<T, F: FnMut(&T, &T) -> bool>(v: &[T], less: &mut F) -> bool {
    (1..v.len()).all(|child| !less(&v[(child - 1) / 2], &v[child]))
}
