/// Lomuto partition with the last element as pivot.
///
/// Re-arranges `v` so that all elements strictly less than the pivot precede it and all others
/// follow it, and returns the pivot's final index. The scan only swaps at indices below the
/// pivot slot, so the pivot stays in place until the final swap drops it between the two sides.
///
/// Both sort drivers must go through this exact scheme: the returned index is excluded from both
/// child ranges, which is what makes concurrent recursion into the two sides race-free.
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let pivot = len - 1;
    let mut i = 0;

    for j in 0..pivot {
        if v[j] < v[pivot] {
            v.swap(i, j);
            i += 1;
        }
    }

    v.swap(i, pivot);
    i
}
