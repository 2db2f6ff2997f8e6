/// Rejected [`GaConfig`](super::GaConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("EmptyPopulation: population_size must be at least 1")]
    EmptyPopulation,
    #[error("ZeroEpochs: num_epochs must be at least 1")]
    ZeroEpochs,
    #[error("MutationRateOutOfRange: mutation_rate must be in [0, 1], got {rate}")]
    MutationRateOutOfRange { rate: f64 },
    #[error("InvalidTournamentSize: tournament size must be in [1, {population_size}], got {size}")]
    InvalidTournamentSize { size: usize, population_size: usize },
    #[error("TooManyElites: alpha_count={alpha_count} exceeds population_size={population_size}")]
    TooManyElites {
        alpha_count: usize,
        population_size: usize,
    },
    #[error("ZeroPatience: patience must be at least 1")]
    ZeroPatience,
}

/// Errors surfaced by the GA engine.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error("InvalidConfig: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("DegenerateInstance: at least 2 points are required, got {size}")]
    DegenerateInstance { size: usize },
    #[error("NotInitialized: initialize the population before evolving")]
    NotInitialized,
    #[error("AlreadyStarted: the population has already been initialized")]
    AlreadyStarted,
    #[error("Stopped: the run has already stopped")]
    Stopped,
}
