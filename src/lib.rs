//! Genetic-algorithm optimizer for the Euclidean Traveling Salesman Problem.
//!
//! - **Problem instances** ([`tsp`]): 2D point sets with cyclic tour length,
//!   plus uniform-random and circular layouts.
//! - **GA engine** ([`ga`]): population of permutation tours evolved with
//!   elitism, tournament or roulette selection, OX or PMX crossover and swap
//!   mutation, with patience-based early stopping and per-generation
//!   best/mean/worst statistics.
//!
//! Runs are single-threaded and fully determined by the configured seed.
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GaRunner};
//! use tsp_ga::tsp::TspInstance;
//!
//! let instance = TspInstance::circle(8, 1.0, 0.0);
//! let config = GaConfig::quick().with_seed(42);
//! let result = GaRunner::run(&instance, &config).unwrap();
//! assert!(result.best_fitness() <= result.initial_best);
//! assert_eq!(result.history.len(), result.generations);
//! ```

pub mod ga;
pub mod random;
pub mod tsp;
