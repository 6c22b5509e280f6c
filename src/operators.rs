//! Generic permutation operators for chromosome implementers.
//!
//! Building blocks for sequence-ordering encodings (scheduling, routing,
//! ordering-for-compression). They operate on `usize` permutations of
//! `0..len` and carry no engine state, so a [`Chromosome`](crate::Chromosome)
//! implementation can delegate its `crossover` and `mutate` directly
//! to them.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

/// Order Crossover (OX) producing two children.
///
/// Each child keeps a random segment of one parent in place and fills the
/// remaining positions with the other parent's elements in their original
/// relative order, wrapping around past the segment.
///
/// Neither parent is modified. Both parents must be permutations of
/// `0..len`.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = (a.min(b), a.max(b));

    (
        fill_around_segment(parent1, parent2, start, end),
        fill_around_segment(parent2, parent1, start, end),
    )
}

/// Keep `keeper[start..=end]` in place, fill the rest from `filler` in
/// order, starting just past the segment and wrapping.
fn fill_around_segment(keeper: &[usize], filler: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = keeper.len();
    let mut child = vec![usize::MAX; n];
    let mut taken = vec![false; n];

    for i in start..=end {
        child[i] = keeper[i];
        taken[keeper[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let value = filler[(end + 1 + offset) % n];
        if !taken[value] {
            child[pos] = value;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Exchanges two uniformly chosen positions. No-op for `len < 2`.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Reverses a uniformly chosen segment (2-opt move). No-op for `len < 2`.
pub fn invert_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = (a.min(b), a.max(b));
    perm[start..=end].reverse();
}
