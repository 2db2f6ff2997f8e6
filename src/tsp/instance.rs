//! Problem instance trait and the point-list implementation.

use super::point::Point;
use crate::random::{create_rng, shuffle};
use rand::Rng;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A TSP instance as seen by the GA engine.
///
/// Tours are permutations of `0..size()`. Lower tour length is better.
///
/// # Implementing
///
/// ```ignore
/// struct Matrix { d: Vec<Vec<f64>> }
///
/// impl TspProblem for Matrix {
///     fn size(&self) -> usize { self.d.len() }
///     fn tour_length(&self, tour: &[usize]) -> f64 {
///         (0..tour.len()).map(|i| self.d[tour[i]][tour[(i + 1) % tour.len()]]).sum()
///     }
/// }
/// ```
pub trait TspProblem {
    /// Number of points `N`.
    fn size(&self) -> usize;

    /// Cyclic length of `tour`, including the closing edge back to the start.
    fn tour_length(&self, tour: &[usize]) -> f64;

    /// A uniformly random permutation of `0..N` drawn from `rng`.
    fn random_tour<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour: Vec<usize> = (0..self.size()).collect();
        shuffle(&mut tour, rng);
        tour
    }
}

/// A Euclidean TSP instance backed by a fixed list of points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TspInstance {
    points: Vec<Point>,
}

impl TspInstance {
    /// Creates an instance from explicit points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// `n` points drawn uniformly from the unit square `[0, 1) x [0, 1)`.
    ///
    /// Uses its own generator seeded with `seed`, so the layout does not
    /// depend on (or disturb) the GA's random stream.
    pub fn uniform(n: usize, seed: u64) -> Self {
        let mut rng = create_rng(seed);
        let points = (0..n)
            .map(|_| {
                let x = rng.random_range(0.0..1.0);
                let y = rng.random_range(0.0..1.0);
                Point::new(x, y)
            })
            .collect();
        Self { points }
    }

    /// `n` points equally spaced on a circle of `radius` centered at
    /// `(0.5, 0.5)`. Point `i` sits at angle `start_angle + 2πi/n`.
    ///
    /// The optimal tour visits the points in angular order; its length is
    /// `n * 2r * sin(π/n)`.
    pub fn circle(n: usize, radius: f64, start_angle: f64) -> Self {
        let points = (0..n)
            .map(|i| {
                let angle = start_angle + 2.0 * PI * i as f64 / n as f64;
                Point::new(0.5 + radius * angle.cos(), 0.5 + radius * angle.sin())
            })
            .collect();
        Self { points }
    }

    /// All points, indexed by tour entries.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point at index `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= self.size()`.
    pub fn point(&self, idx: usize) -> &Point {
        &self.points[idx]
    }

    /// Checks that `tour` is a permutation of `0..N` in O(N).
    pub fn is_valid_tour(&self, tour: &[usize]) -> bool {
        crate::ga::is_permutation(tour, self.points.len())
    }
}

impl TspProblem for TspInstance {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        if n == 0 {
            return 0.0;
        }
        (0..n)
            .map(|i| {
                let from = &self.points[tour[i]];
                let to = &self.points[tour[(i + 1) % n]];
                from.distance(to)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> TspInstance {
        TspInstance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_tour_length_is_cyclic() {
        let inst = unit_square();
        assert!((inst.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
        // Crossing tour: two sides + two diagonals
        let crossing = 2.0 + 2.0 * 2f64.sqrt();
        assert!((inst.tour_length(&[0, 2, 1, 3]) - crossing).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let inst = unit_square();
        assert_eq!(inst.tour_length(&[]), 0.0);
        assert_eq!(inst.tour_length(&[2]), 0.0);
        // Two points: the edge is traversed twice
        assert!((inst.tour_length(&[0, 1]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let inst = TspInstance::uniform(30, 1);
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let tour = inst.random_tour(&mut rng);
            assert!(inst.is_valid_tour(&tour), "invalid tour: {tour:?}");
        }
    }

    #[test]
    fn test_uniform_is_reproducible_and_bounded() {
        let a = TspInstance::uniform(25, 9);
        let b = TspInstance::uniform(25, 9);
        assert_eq!(a, b);
        assert_eq!(a.size(), 25);
        for p in a.points() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_circle_optimal_length() {
        let n = 8;
        let inst = TspInstance::circle(n, 1.0, 0.0);
        let ordered: Vec<usize> = (0..n).collect();
        let expected = n as f64 * 2.0 * (PI / n as f64).sin();
        assert!((inst.tour_length(&ordered) - expected).abs() < 1e-9);
        for p in inst.points() {
            assert!((p.distance(&Point::new(0.5, 0.5)) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_is_valid_tour() {
        let inst = unit_square();
        assert!(inst.is_valid_tour(&[3, 1, 0, 2]));
        assert!(!inst.is_valid_tour(&[0, 1, 2]));
        assert!(!inst.is_valid_tour(&[0, 1, 1, 3]));
        assert!(!inst.is_valid_tour(&[0, 1, 2, 4]));
    }
}
