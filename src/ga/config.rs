//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::errors::ConfigError;
use super::operators::Crossover;
use super::selection::Selection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::{Crossover, GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.num_epochs, 500);
/// assert_eq!(config.selection, Selection::Tournament(3));
/// assert_eq!(config.crossover, Crossover::Ox);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{Crossover, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::Roulette)
///     .with_crossover(Crossover::Pmx)
///     .with_alpha_count(4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Fixed for the whole run.
    pub population_size: usize,

    /// Maximum number of generations.
    pub num_epochs: usize,

    /// Probability (0.0–1.0) that a child receives one swap mutation.
    ///
    /// Applied once per child, not per gene.
    pub mutation_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Recombination operator.
    pub crossover: Crossover,

    /// Number of best individuals copied unchanged into the next generation.
    pub alpha_count: usize,

    /// Consecutive generations without a strictly better Best-Ever before
    /// the run stops early.
    pub patience: usize,

    /// Seed of the single random generator owned by the run.
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            num_epochs: 500,
            mutation_rate: 0.05,
            selection: Selection::default(),
            crossover: Crossover::default(),
            alpha_count: 2,
            patience: 100,
            seed: 42,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_num_epochs(mut self, n: usize) -> Self {
        self.num_epochs = n;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the number of elites.
    pub fn with_alpha_count(mut self, n: usize) -> Self {
        self.alpha_count = n;
        self
    }

    /// Sets the early-stopping patience.
    pub fn with_patience(mut self, n: usize) -> Self {
        self.patience = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Preset for a quick validation run: population 50, 30 generations.
    pub fn quick() -> Self {
        Self {
            population_size: 50,
            num_epochs: 30,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.num_epochs == 0 {
            return Err(ConfigError::ZeroEpochs);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange {
                rate: self.mutation_rate,
            });
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 || k > self.population_size {
                return Err(ConfigError::InvalidTournamentSize {
                    size: k,
                    population_size: self.population_size,
                });
            }
        }
        if self.alpha_count > self.population_size {
            return Err(ConfigError::TooManyElites {
                alpha_count: self.alpha_count,
                population_size: self.population_size,
            });
        }
        if self.patience == 0 {
            return Err(ConfigError::ZeroPatience);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.num_epochs, 500);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert_eq!(config.crossover, Crossover::Ox);
        assert_eq!(config.alpha_count, 2);
        assert_eq!(config.patience, 100);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_num_epochs(1000)
            .with_mutation_rate(0.2)
            .with_selection(Selection::Roulette)
            .with_crossover(Crossover::Pmx)
            .with_alpha_count(5)
            .with_patience(30)
            .with_seed(7);

        assert_eq!(config.population_size, 80);
        assert_eq!(config.num_epochs, 1000);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.selection, Selection::Roulette);
        assert_eq!(config.crossover, Crossover::Pmx);
        assert_eq!(config.alpha_count, 5);
        assert_eq!(config.patience, 30);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_with_tournament_size() {
        let config = GaConfig::default().with_tournament_size(5);
        assert_eq!(config.selection, Selection::Tournament(5));
    }

    #[test]
    fn test_quick_preset() {
        let config = GaConfig::quick().with_seed(1);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.num_epochs, 30);
        assert_eq!(config.seed, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_zero_epochs() {
        let config = GaConfig::default().with_num_epochs(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroEpochs));
    }

    #[test]
    fn test_validate_mutation_rate_not_clamped() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let config = GaConfig::default().with_mutation_rate(rate);
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::MutationRateOutOfRange { .. })
                ),
                "rate {rate} should be rejected"
            );
        }
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_tournament_size() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTournamentSize { size: 0, .. })
        ));

        let config = GaConfig::default()
            .with_population_size(10)
            .with_tournament_size(11);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTournamentSize {
                size: 11,
                population_size: 10
            })
        );

        let config = GaConfig::default()
            .with_population_size(10)
            .with_tournament_size(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_elites() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_alpha_count(11);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyElites { .. })
        ));

        // Every slot an elite is allowed
        let config = GaConfig::default()
            .with_population_size(10)
            .with_alpha_count(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_patience() {
        let config = GaConfig::default().with_patience(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPatience));
    }
}
