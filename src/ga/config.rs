//! Genetic algorithm parameters.

use serde::{Deserialize, Serialize};

/// Parameters for [`genetic`](super::genetic).
///
/// Every field has a default, so a partial JSON object such as
/// `{"generations": 50}` deserializes.
///
/// # Examples
///
/// ```
/// use u_wayfind::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(7);
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 30);
/// assert_eq!(config.mutation_rate, 0.1);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations bred after the initial population.
    pub generations: usize,
    /// Probability that a child receives one swap mutation.
    pub mutation_rate: f64,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the swap-mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate.clamp(0.0, 1.0);
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
