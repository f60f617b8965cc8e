#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate `n` integers drawn uniformly from `range`.
pub fn random_ints(n: usize, range: std::ops::Range<i64>, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(range.clone())).collect()
}

/// Return `true` iff `v` is non-decreasing.
pub fn is_sorted<T: PartialOrd>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Return `true` iff `a` and `b` hold the same multiset of elements.
pub fn same_multiset<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}
