//! Population members.
//!
//! An [`Individual`] pairs a tour with its cached length. The tour is only
//! reachable through accessors so the cached fitness can never drift from
//! the tour it was computed for.

use crate::tsp::TspProblem;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A visiting order: a permutation of `0..N`.
pub type Tour = Vec<usize>;

/// A candidate tour with its cyclic length (lower is better).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    tour: Tour,
    fitness: f64,
}

impl Individual {
    /// Wraps `tour`, computing its fitness with `problem`.
    pub fn evaluate<P: TspProblem>(tour: Tour, problem: &P) -> Self {
        let fitness = problem.tour_length(&tour);
        Self { tour, fitness }
    }

    /// The visiting order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Cyclic tour length.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the individual, returning its tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Ascending fitness order; incomparable values compare equal.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness
            .partial_cmp(&other.fitness)
            .unwrap_or(Ordering::Equal)
    }
}

/// Checks that `perm` is a permutation of `0..n` in O(n).
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Sorts a population best-first. Stable, so equal-fitness individuals keep
/// their relative order.
pub(crate) fn sort_by_fitness(population: &mut [Individual]) {
    population.sort_by(Individual::cmp_fitness);
}

/// The individual with the lowest fitness; the first one on ties.
pub(crate) fn find_best(population: &[Individual]) -> Option<&Individual> {
    population.iter().reduce(|best, ind| {
        if ind.fitness < best.fitness {
            ind
        } else {
            best
        }
    })
}
