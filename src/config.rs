//! Run configuration.
//!
//! [`AcoConfig`] holds every parameter of a colony run. Validation is eager:
//! [`validate`](AcoConfig::validate) is called at run entry, so an invalid
//! configuration never makes it into the generation loop.

use crate::error::AcoError;

/// Policy applied when an item's candidate-bin pheromone column sums to zero
/// during construction.
///
/// With random initialization every column starts positive, but heavy
/// evaporation can underflow a column to zero, and tests may construct such
/// graphs directly. The outcome must be deterministic either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallbackPolicy {
    /// Pick a bin uniformly at random, reusing the item's single uniform
    /// draw (`floor(draw * num_bins)`, clamped to the last bin).
    UniformRandom,

    /// Always pick the given bin index.
    FixedBin(usize),

    /// Abort the construction with
    /// [`AcoError::ConstructionDeadlock`](crate::AcoError::ConstructionDeadlock).
    Fail,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::UniformRandom
    }
}

/// Configuration for an ACO load-balancing run.
///
/// # Builder Pattern
///
/// ```
/// use aco_balance::AcoConfig;
///
/// let config = AcoConfig::new(10, (1..=50).map(f64::from).collect())
///     .with_population_size(100)
///     .with_evaporation_factor(0.9)
///     .with_construction_limit(10_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of bins to balance across. Must be at least 1.
    pub num_bins: usize,

    /// Item weights in processing order. Must be non-empty with every
    /// weight strictly positive.
    pub items: Vec<f64>,

    /// Number of routes constructed per generation. Must be at least 1.
    pub population_size: usize,

    /// Retention multiplier applied to the whole pheromone graph once per
    /// generation, in `[0, 1]`. Values near 1 preserve more pheromone.
    ///
    /// Named "evaporation factor" for historical reasons; the literal
    /// semantics are a retention multiply.
    pub evaporation_factor: f64,

    /// Total number of route constructions allowed before the run ends.
    ///
    /// Counts constructions, not generations. Generations always run whole,
    /// so a limit that is not a multiple of the population size is exceeded
    /// by the final generation; the result reports the true count.
    pub construction_limit: usize,

    /// Policy for an all-zero pheromone column during construction.
    pub fallback: FallbackPolicy,

    /// Whether to construct the generation's routes in parallel using rayon.
    ///
    /// Each population member always gets a private bin set and a
    /// deterministically derived RNG, so results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl AcoConfig {
    /// Creates a configuration with the given problem instance and default
    /// algorithm parameters (population 10, evaporation factor 0.9, limit
    /// 10 000, uniform-random fallback, sequential).
    pub fn new(num_bins: usize, items: Vec<f64>) -> Self {
        Self {
            num_bins,
            items,
            population_size: 10,
            evaporation_factor: 0.9,
            construction_limit: 10_000,
            fallback: FallbackPolicy::default(),
            parallel: false,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, p: usize) -> Self {
        self.population_size = p;
        self
    }

    /// Sets the evaporation (retention) factor.
    pub fn with_evaporation_factor(mut self, e: f64) -> Self {
        self.evaporation_factor = e;
        self
    }

    /// Sets the construction budget.
    pub fn with_construction_limit(mut self, limit: usize) -> Self {
        self.construction_limit = limit;
        self
    }

    /// Sets the zero-column fallback policy.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Enables or disables parallel route construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`AcoError::InvalidConfiguration`] describing the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_bins == 0 {
            return Err(AcoError::InvalidConfiguration(
                "num_bins must be at least 1".into(),
            ));
        }
        if self.items.is_empty() {
            return Err(AcoError::InvalidConfiguration(
                "items must not be empty".into(),
            ));
        }
        if let Some(pos) = self.items.iter().position(|&w| !(w > 0.0)) {
            return Err(AcoError::InvalidConfiguration(format!(
                "item weights must be positive; item {pos} is {}",
                self.items[pos]
            )));
        }
        if self.population_size == 0 {
            return Err(AcoError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.evaporation_factor) {
            return Err(AcoError::InvalidConfiguration(format!(
                "evaporation_factor must be in [0, 1], got {}",
                self.evaporation_factor
            )));
        }
        if self.construction_limit == 0 {
            return Err(AcoError::InvalidConfiguration(
                "construction_limit must be at least 1".into(),
            ));
        }
        if let FallbackPolicy::FixedBin(b) = self.fallback {
            if b >= self.num_bins {
                return Err(AcoError::InvalidConfiguration(format!(
                    "fallback bin {b} out of range for {} bins",
                    self.num_bins
                )));
            }
        }
        Ok(())
    }

    /// Sum of all item weights. Used to normalize per-generation minimum
    /// fitness in the reported statistics.
    pub fn total_item_weight(&self) -> f64 {
        self.items.iter().sum()
    }
}
