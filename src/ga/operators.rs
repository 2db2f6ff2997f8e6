//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation operators for tours encoded as `&[usize]` index
//! vectors. Every operator maps valid permutations of `0..n` to a valid
//! permutation of `0..n`.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`] (OX): Davis (1985) — preserves relative order
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985) — preserves absolute position
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: Exchange two random positions — O(1)
//! - [`mutate`]: [`swap_mutation`] applied with a given probability
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recombination operator used to build each child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crossover {
    /// Order Crossover, see [`order_crossover`].
    #[default]
    Ox,
    /// Partially Mapped Crossover, see [`pmx_crossover`].
    Pmx,
}

impl Crossover {
    /// Combines two parent tours into one child tour.
    pub fn apply<R: Rng>(&self, parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
        match self {
            Crossover::Ox => order_crossover(parent1, parent2, rng),
            Crossover::Pmx => pmx_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) for permutations.
///
/// Preserves the **relative order** of elements from both parents.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]`
/// 2. Copy parent1's segment to the child at the same positions
/// 3. Starting at `(end + 1) % n`, fill the remaining positions circularly
///    with parent2's elements taken in parent2's circular order from
///    `(end + 1) % n`, skipping elements already in the child
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    ox_build_child(parent1, parent2, start, end)
}

/// Build one OX child: copy segment from `template`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    // Step 1: Copy segment from template
    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // Step 2: Fill from donor, starting after segment end, wrapping around
    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = donor[(end + 1 + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Partially Mapped Crossover (PMX) for permutations.
///
/// Preserves the **absolute position** of elements from both parents
/// as much as possible.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Select a random segment `[start, end]`
/// 2. Start from a copy of parent1 and overwrite the segment with parent2's
///    values, recording the value pairs `parent1[i] <-> parent2[i]`
/// 3. Outside the segment, keep parent1's value unless it now also occurs
///    inside the segment; in that case follow the pairs from the segment
///    value back to the parent1 value it displaced, until the value no
///    longer occurs in the segment
///
/// The pairs form an injective map from the child's segment values to the
/// displaced parent1 values, and a value outside parent1's segment has no
/// preimage, so every chain terminates.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn pmx_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    pmx_build_child(parent1, parent2, start, end)
}

/// Build one PMX child: segment from `donor`, everything else from
/// `template` resolved through the segment mapping.
fn pmx_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = template.to_vec();
    // mapping[v] = template value displaced by donor value v
    let mut mapping: Vec<Option<usize>> = vec![None; n];

    for i in start..=end {
        child[i] = donor[i];
        mapping[donor[i]] = Some(template[i]);
    }

    for i in (0..start).chain(end + 1..n) {
        let mut val = template[i];
        while let Some(mapped) = mapping[val] {
            val = mapped;
        }
        child[i] = val;
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// The positions are drawn independently and may coincide (a no-op).
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Applies [`swap_mutation`] with probability `rate`, once per tour.
///
/// Returns whether the swap was applied.
pub fn mutate<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) < rate {
        swap_mutation(perm, rng);
        true
    } else {
        false
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
