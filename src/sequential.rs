//! Single-threaded recursive quicksort, the leaf strategy of the parallel variant and the
//! baseline of the benchmark.
//!
//! Not stable, and with the fixed last-element pivot the worst case is O(n^2) comparisons
//! (already sorted input is the canonical offender). The benchmark feeds it random data where
//! the partition tree stays balanced.

use crate::partition::partition;

sort_impl!("sequential_lomuto_quicksort");

pub fn sort<T: Ord>(v: &mut [T]) {
    let mut v = v;

    while v.len() >= 2 {
        let mid = partition(v);

        // `mid` is the pivot's final slot, it takes part in neither side.
        let (left, rest) = v.split_at_mut(mid);
        let right = &mut rest[1..];

        // Recurse into the shorter side, loop on the longer one. Keeps the stack logarithmic
        // even when the fixed pivot choice degenerates the partition sizes.
        if left.len() < right.len() {
            sort(left);
            v = right;
        } else {
            sort(right);
            v = left;
        }
    }
}

/// Sorts the inclusive index range `[lo, hi]` of `v` in place, leaving the rest of the slice
/// untouched.
///
/// A range with `lo >= hi` holds at most one element and is a no-op. An out-of-bounds `hi`
/// panics via slice indexing before any element is moved, it is never clamped.
pub fn sort_range<T: Ord>(v: &mut [T], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    sort(&mut v[lo..=hi]);
}
