//! Fisher-Yates shuffling with caller-supplied randomness.
//!
//! The generator is always passed in, never ambient: production callers hand
//! over `rand::thread_rng()`, tests hand over a seeded `StdRng` and get
//! fully deterministic batches.

use rand::Rng;

/// Shuffles a slice in place with the Fisher-Yates algorithm.
///
/// Produces a uniform distribution over permutations when `rng` is uniform.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of the slice, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}
