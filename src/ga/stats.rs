//! Per-generation fitness statistics.

use super::types::Individual;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fitness summary of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// Lowest tour length in the population.
    pub best: f64,
    /// Arithmetic mean tour length.
    pub mean: f64,
    /// Highest tour length in the population.
    pub worst: f64,
}

impl GenerationStats {
    /// Summarizes `population`. Returns `None` if it is empty.
    pub fn from_population(population: &[Individual]) -> Option<Self> {
        if population.is_empty() {
            return None;
        }
        let mut best = f64::INFINITY;
        let mut worst = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for f in population.iter().map(Individual::fitness) {
            best = best.min(f);
            worst = worst.max(f);
            sum += f;
        }
        Some(Self {
            best,
            mean: sum / population.len() as f64,
            worst,
        })
    }
}

/// Time series of per-generation statistics.
///
/// One entry per executed generation in every series, so all four always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitnessHistory {
    /// Best tour length of each generation's population.
    pub best: Vec<f64>,
    /// Mean tour length of each generation's population.
    pub mean: Vec<f64>,
    /// Worst tour length of each generation's population.
    pub worst: Vec<f64>,
    /// Best-Ever tour length after each generation. Non-increasing.
    pub best_ever: Vec<f64>,
}

impl FitnessHistory {
    /// Creates an empty history with room for `generations` entries.
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            best: Vec::with_capacity(generations),
            mean: Vec::with_capacity(generations),
            worst: Vec::with_capacity(generations),
            best_ever: Vec::with_capacity(generations),
        }
    }

    /// Appends one generation.
    pub fn record(&mut self, stats: GenerationStats, best_ever: f64) {
        self.best.push(stats.best);
        self.mean.push(stats.mean);
        self.worst.push(stats.worst);
        self.best_ever.push(best_ever);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no generation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Statistics of generation `g` (1-based), if recorded.
    pub fn generation(&self, g: usize) -> Option<GenerationStats> {
        let i = g.checked_sub(1)?;
        Some(GenerationStats {
            best: *self.best.get(i)?,
            mean: *self.mean.get(i)?,
            worst: *self.worst.get(i)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::{Point, TspInstance};

    #[test]
    fn test_from_population() {
        let inst = TspInstance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        // Every tour of three collinear points has length 6
        let pop: Vec<Individual> = [[0, 1, 2], [2, 0, 1]]
            .iter()
            .map(|t| Individual::evaluate(t.to_vec(), &inst))
            .collect();
        let stats = GenerationStats::from_population(&pop).expect("non-empty");
        assert!((stats.best - 6.0).abs() < 1e-12);
        assert!((stats.mean - 6.0).abs() < 1e-12);
        assert!((stats.worst - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_between_extremes() {
        let inst = TspInstance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        let pop: Vec<Individual> = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 1, 3, 2]]
            .iter()
            .map(|t| Individual::evaluate(t.to_vec(), &inst))
            .collect();
        let stats = GenerationStats::from_population(&pop).expect("non-empty");
        assert!((stats.best - 4.0).abs() < 1e-12);
        assert!(stats.best <= stats.mean && stats.mean <= stats.worst);
    }

    #[test]
    fn test_empty_population() {
        assert!(GenerationStats::from_population(&[]).is_none());
    }

    #[test]
    fn test_history_record() {
        let mut history = FitnessHistory::with_capacity(4);
        assert!(history.is_empty());
        history.record(
            GenerationStats {
                best: 3.0,
                mean: 4.0,
                worst: 5.0,
            },
            3.0,
        );
        history.record(
            GenerationStats {
                best: 2.0,
                mean: 3.5,
                worst: 6.0,
            },
            2.0,
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history.best_ever, vec![3.0, 2.0]);
        assert_eq!(
            history.generation(2),
            Some(GenerationStats {
                best: 2.0,
                mean: 3.5,
                worst: 6.0
            })
        );
        assert_eq!(history.generation(0), None);
        assert_eq!(history.generation(3), None);
    }
}
