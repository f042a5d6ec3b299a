//! Fork-join quicksort with a bounded spawn budget.
//!
//! Each fork level partitions its range and hands the two pivot-free halves to `rayon::join`,
//! which blocks until both are sorted. Two cutoffs stop the forking: a remaining recursion
//! budget derived from the worker count, and a minimum sub-range size. Past either cutoff the
//! whole range is delegated to [`crate::sequential`].
//!
//! The two halves come out of `split_at_mut`, so the no-overlap invariant that makes concurrent
//! mutation of one slice race-free is enforced by the borrow checker, not by index discipline.

use crate::partition::partition;
use crate::sequential;

sort_impl!("parallel_bounded_quicksort");

/// Sorts with the ambient rayon pool's thread count as worker budget.
pub fn sort<T: Ord + Send>(v: &mut [T]) {
    sort_with_budget(v, rayon::current_num_threads().max(1), None);
}

/// Sorts `v` in place, forking up to a depth derived from `worker_budget`.
///
/// `worker_budget` is a hint for the number of workers available, not a cap on tasks spawned;
/// it must be positive. When `sequential_threshold` is `None` it defaults to
/// `len / (worker_budget * 2)`; either way it is clamped to at least 1, a zero threshold would
/// never cut off the forking.
///
/// A panicking comparison or a failed spawn propagates through the pending joins and aborts the
/// whole sort. The slice is then partially permuted but still holds the original elements, every
/// swap stays inside an already-validated range.
pub fn sort_with_budget<T: Ord + Send>(
    v: &mut [T],
    worker_budget: usize,
    sequential_threshold: Option<usize>,
) {
    assert!(worker_budget > 0, "worker budget must be positive");

    let threshold = sequential_threshold
        .unwrap_or(v.len() / (worker_budget * 2))
        .max(1);

    sort_bounded(v, max_depth_for_budget(worker_budget), threshold);
}

/// Permitted fork levels for a given worker budget.
///
/// Each level doubles the number of concurrent tasks, so `log2(budget)` levels match the budget
/// exactly; the factor 2 compensates for partitions rarely splitting evenly. A tuning heuristic,
/// not a correctness requirement -- any policy that keeps the task count proportional to the
/// budget works.
fn max_depth_for_budget(worker_budget: usize) -> u32 {
    worker_budget.ilog2() * 2
}

fn sort_bounded<T: Ord + Send>(v: &mut [T], depth_remaining: u32, threshold: usize) {
    if v.len() < 2 {
        return;
    }

    // Dual cutoff: too small to be worth a task, or out of fork budget. Either way the whole
    // range goes to the sequential driver, no partitioning happens here.
    if v.len() - 1 < threshold || depth_remaining == 0 {
        sequential::sort(v);
        return;
    }

    let mid = partition(v);

    let (left, rest) = v.split_at_mut(mid);
    let right = &mut rest[1..];

    // One decrement shared by both children, the budget counts fork levels, not tasks.
    let depth_remaining = depth_remaining - 1;

    rayon::join(
        || sort_bounded(left, depth_remaining, threshold),
        || sort_bounded(right, depth_remaining, threshold),
    );
}
