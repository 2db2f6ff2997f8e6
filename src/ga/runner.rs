//! GA evolutionary loop execution.
//!
//! [`GaEngine`] owns one run: the population, the single seeded generator,
//! the Best-Ever individual and the fitness history. It moves through
//! [`RunState::NotStarted`] → [`RunState::Running`] → [`RunState::Stopped`]:
//!
//! - [`initialize`](GaEngine::initialize) seeds the population
//! - [`evolve`](GaEngine::evolve) runs one generation:
//!   elitism → selection → crossover → mutation → evaluation → replacement
//! - [`run`](GaEngine::run) repeats `evolve` until the epoch budget is spent
//!   or `patience` generations pass without improvement
//!
//! [`GaRunner`] wraps the whole lifecycle in a single call.

use super::config::GaConfig;
use super::errors::GaError;
use super::operators::mutate;
use super::stats::{FitnessHistory, GenerationStats};
use super::types::{find_best, is_permutation, sort_by_fitness, Individual};
use crate::random::create_rng;
use crate::tsp::TspProblem;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// All `num_epochs` generations were executed.
    EpochsExhausted,
    /// `patience` consecutive generations passed without a strictly better
    /// Best-Ever.
    Patience,
}

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, population not yet seeded.
    NotStarted,
    /// Population seeded; generations can be evolved.
    Running,
    /// Terminal.
    Stopped(StopReason),
}

/// View of the run after a generation, handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSnapshot<'a> {
    /// Generation number; `0` is the freshly initialized population.
    pub generation: usize,
    /// Statistics of the current population.
    pub stats: GenerationStats,
    /// Best individual seen so far.
    pub best_ever: &'a Individual,
    /// Consecutive generations without improvement.
    pub generations_without_improvement: usize,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Best fitness of the randomly initialized population.
    pub initial_best: f64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Per-generation statistics, `generations` entries per series.
    pub history: FitnessHistory,
}

impl GaResult {
    /// Best tour length (same as `best.fitness()`).
    pub fn best_fitness(&self) -> f64 {
        self.best.fitness()
    }

    /// Whether the run stopped on patience rather than on the epoch budget.
    pub fn stopped_early(&self) -> bool {
        self.stop_reason == StopReason::Patience
    }
}

/// A single GA run over one problem instance.
///
/// # Usage
///
/// ```ignore
/// let instance = TspInstance::circle(8, 1.0, 0.0);
/// let mut engine = GaEngine::new(&instance, GaConfig::default())?;
/// let result = engine.run()?;
/// println!("best length: {}", result.best_fitness());
/// ```
pub struct GaEngine<'a, P: TspProblem> {
    problem: &'a P,
    config: GaConfig,
    rng: StdRng,
    population: Vec<Individual>,
    best: Option<Individual>,
    initial_best: f64,
    history: FitnessHistory,
    generations_without_improvement: usize,
    state: RunState,
}

impl<'a, P: TspProblem> GaEngine<'a, P> {
    /// Creates an engine in the [`RunState::NotStarted`] state.
    ///
    /// Fails if the configuration is invalid or the instance has fewer than
    /// two points.
    pub fn new(problem: &'a P, config: GaConfig) -> Result<Self, GaError> {
        config.validate()?;
        let size = problem.size();
        if size < 2 {
            return Err(GaError::DegenerateInstance { size });
        }

        Ok(Self {
            problem,
            rng: create_rng(config.seed),
            population: Vec::with_capacity(config.population_size),
            best: None,
            initial_best: f64::INFINITY,
            history: FitnessHistory::with_capacity(config.num_epochs),
            generations_without_improvement: 0,
            state: RunState::NotStarted,
            config,
        })
    }

    /// Seeds the population with independently shuffled tours and records
    /// the best of them as Best-Ever.
    #[instrument(level = "debug", skip_all, fields(population_size = self.config.population_size, points = self.problem.size()))]
    pub fn initialize(&mut self) -> Result<(), GaError> {
        if self.state != RunState::NotStarted {
            return Err(GaError::AlreadyStarted);
        }

        let problem = self.problem;
        self.population = (0..self.config.population_size)
            .map(|_| Individual::evaluate(problem.random_tour(&mut self.rng), problem))
            .collect();

        let best = find_best(&self.population)
            .expect("population must not be empty")
            .clone();
        self.initial_best = best.fitness();
        debug!(best = best.fitness(), "population initialized");
        self.best = Some(best);
        self.state = RunState::Running;
        Ok(())
    }

    /// Runs one generation and records its statistics.
    ///
    /// Returns the state after the generation; once it is
    /// [`RunState::Stopped`] further calls fail with [`GaError::Stopped`].
    pub fn evolve(&mut self) -> Result<RunState, GaError> {
        match self.state {
            RunState::NotStarted => return Err(GaError::NotInitialized),
            RunState::Stopped(_) => return Err(GaError::Stopped),
            RunState::Running => {}
        }

        let n = self.problem.size();
        let size = self.config.population_size;
        sort_by_fitness(&mut self.population);

        // Elites survive untouched
        let elite_count = self.config.alpha_count.min(self.population.len());
        let mut next_gen: Vec<Individual> = Vec::with_capacity(size);
        next_gen.extend_from_slice(&self.population[..elite_count]);

        while next_gen.len() < size {
            // Parents may be the same individual drawn twice
            let p1 = self.config.selection.select(&self.population, &mut self.rng);
            let p2 = self.config.selection.select(&self.population, &mut self.rng);

            let mut child = self.config.crossover.apply(
                self.population[p1].tour(),
                self.population[p2].tour(),
                &mut self.rng,
            );
            mutate(&mut child, self.config.mutation_rate, &mut self.rng);
            debug_assert!(is_permutation(&child, n), "operator broke permutation: {child:?}");

            next_gen.push(Individual::evaluate(child, self.problem));
        }

        self.population = next_gen;
        sort_by_fitness(&mut self.population);

        let improved = self.update_best();
        let stats = GenerationStats::from_population(&self.population)
            .expect("population must not be empty");
        let best_ever = self.best_fitness();
        self.history.record(stats, best_ever);

        let generation = self.history.len();
        debug!(
            generation,
            best = stats.best,
            mean = stats.mean,
            worst = stats.worst,
            best_ever,
            improved,
            stagnation = self.generations_without_improvement,
            "generation complete"
        );
        if generation % 50 == 0 {
            info!(generation, best_ever, "progress");
        }

        if self.generations_without_improvement >= self.config.patience {
            info!(generation, patience = self.config.patience, "early stop: patience reached");
            self.state = RunState::Stopped(StopReason::Patience);
        } else if generation >= self.config.num_epochs {
            self.state = RunState::Stopped(StopReason::EpochsExhausted);
        }
        Ok(self.state)
    }

    /// Runs until the engine stops. Initializes first if needed.
    pub fn run(&mut self) -> Result<GaResult, GaError> {
        self.run_with_observer(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after initialization
    /// (generation 0) and after every generation.
    #[instrument(level = "info", skip_all, fields(seed = self.config.seed, selection = ?self.config.selection, crossover = ?self.config.crossover))]
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> Result<GaResult, GaError>
    where
        F: FnMut(&GenerationSnapshot<'_>),
    {
        if self.state == RunState::NotStarted {
            self.initialize()?;
            if let Some(snapshot) = self.snapshot() {
                observer(&snapshot);
            }
        }

        loop {
            let state = self.evolve()?;
            if let Some(snapshot) = self.snapshot() {
                observer(&snapshot);
            }

            if let RunState::Stopped(stop_reason) = state {
                let best = self.best.clone().ok_or(GaError::NotInitialized)?;
                info!(
                    generations = self.history.len(),
                    best = best.fitness(),
                    ?stop_reason,
                    "run finished"
                );
                return Ok(GaResult {
                    best,
                    initial_best: self.initial_best,
                    generations: self.history.len(),
                    stop_reason,
                    history: self.history.clone(),
                });
            }
        }
    }

    /// Replaces Best-Ever if the current population holds a strictly
    /// better individual. The only place Best-Ever changes after
    /// initialization.
    fn update_best(&mut self) -> bool {
        let Some(candidate) = find_best(&self.population) else {
            return false;
        };
        let improved = self
            .best
            .as_ref()
            .map_or(true, |best| candidate.fitness() < best.fitness());
        if improved {
            self.best = Some(candidate.clone());
            self.generations_without_improvement = 0;
        } else {
            self.generations_without_improvement += 1;
        }
        improved
    }

    fn best_fitness(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, Individual::fitness)
    }

    fn snapshot(&self) -> Option<GenerationSnapshot<'_>> {
        Some(GenerationSnapshot {
            generation: self.history.len(),
            stats: GenerationStats::from_population(&self.population)?,
            best_ever: self.best.as_ref()?,
            generations_without_improvement: self.generations_without_improvement,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The run's configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population, best-first after each generation.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best individual seen so far; `None` before initialization.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Statistics of every executed generation.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Number of generations executed so far.
    pub fn generations(&self) -> usize {
        self.history.len()
    }

    /// Consecutive generations without a strictly better Best-Ever.
    pub fn generations_without_improvement(&self) -> usize {
        self.generations_without_improvement
    }
}

/// Runs a complete GA optimization in one call.
///
/// # Usage
///
/// ```ignore
/// let instance = TspInstance::uniform(50, 42);
/// let result = GaRunner::run(&instance, &GaConfig::default())?;
/// println!("Best length: {}", result.best_fitness());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Validates `config`, then initializes and evolves until stopped.
    pub fn run<P: TspProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, GaError> {
        GaEngine::new(problem, config.clone())?.run()
    }
}

// ============================================================================
// Tests
// ============================================================================
