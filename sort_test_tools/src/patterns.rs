use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;

use rand::prelude::*;

use crate::types::{Person, TotalF64};

/// Provides a set of input patterns useful for testing and benchmarking sorting algorithms.
/// Key patterns are i32 values, plus the two element kinds the benchmark measures: doubles and
/// composite records.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = len / saw_count.max(1);
    let saw_directions = random_uniform((len / chunks_size.max(1)) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size.max(1)).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Uniform doubles in `[0, 1_000_000)`, rounded to 3 decimal places.
pub fn random_doubles(len: usize) -> Vec<TotalF64> {
    let mut rng = new_rng();

    (0..len)
        .map(|_| TotalF64((rng.gen::<f64>() * 1_000_000.0 * 1000.0).round() / 1000.0))
        .collect()
}

/// Records with a name drawn from a fixed pool and an age uniform in `1..1_000_000`. Heavy name
/// duplication makes unstable reordering of equal ages observable.
pub fn random_persons(len: usize) -> Vec<Person> {
    const NAMES: [&str; 8] = [
        "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Hank",
    ];

    let mut rng = new_rng();

    (0..len)
        .map(|_| Person {
            name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
            age: rng.gen_range(1..1_000_000),
        })
        .collect()
}

/// One seed per process, so every pattern of a test run can be reproduced by re-running with
/// `OVERRIDE_SEED=<seed>`.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        if let Ok(override_seed) = env::var("OVERRIDE_SEED") {
            u64::from_str(&override_seed).unwrap()
        } else {
            thread_rng().gen()
        }
    })
}

// --- Private ---

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
