//! Genetic Algorithm for the Euclidean TSP.
//!
//! A generational GA over permutation-encoded tours. One [`GaEngine`] owns
//! a population of [`Individual`]s and a single seeded generator, and
//! evolves it generation by generation with elitism, parent selection,
//! permutation crossover and swap mutation, stopping on an epoch budget or
//! when the best tour has not improved for `patience` generations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, operators, patience)
//! - [`Selection`]: Tournament or roulette parent selection
//! - [`Crossover`]: OX or PMX recombination
//! - [`GaEngine`]: Step-wise run (initialize / evolve / run)
//! - [`GaRunner`]: One-call run
//! - [`GaResult`]: Best tour, stop reason and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover (OX, PMX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod errors;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use config::GaConfig;
pub use errors::{ConfigError, GaError};
pub use operators::Crossover;
pub use runner::{GaEngine, GaResult, GaRunner, GenerationSnapshot, RunState, StopReason};
pub use selection::Selection;
pub use stats::{FitnessHistory, GenerationStats};
pub use types::{is_permutation, Individual, Tour};
