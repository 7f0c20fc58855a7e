//! Fisher–Yates shuffle used to bind redemption numbers to prizes.
//!
//! The generator is always passed in by the caller so draws can be replayed
//! from a seed in tests and rehearsals.

use rand::Rng;

/// Permute `items` in place, uniformly over all `n!` orderings.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        // Inclusive upper bound: excluding `i` would bias the permutation
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`; the input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}
