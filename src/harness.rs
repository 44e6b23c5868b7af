//! Batch experiment harness.
//!
//! Runs one configuration repeatedly and aggregates fitness and runtime
//! statistics, for comparing parameter choices (population size, evaporation
//! factor) across instances. Consumers render the numbers however they like;
//! this module only produces them.

use crate::config::AcoConfig;
use crate::error::AcoError;
use crate::runner::AcoRunner;

/// Aggregate statistics over repeated runs of one configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchStats {
    /// Per-run `(best fitness, runtime seconds)` pairs, in run order.
    pub runs: Vec<(f64, f64)>,

    /// Mean best fitness across runs.
    pub mean_fitness: f64,

    /// Lowest best fitness across runs.
    pub min_fitness: f64,

    /// Highest best fitness across runs.
    pub max_fitness: f64,

    /// Mean runtime in seconds.
    pub mean_runtime: f64,

    /// Summed runtime in seconds.
    pub total_runtime: f64,
}

/// Runs `config` `repeats` times and aggregates the results.
///
/// When the configuration carries a seed, run `i` uses `seed + i`, so the
/// whole batch is reproducible while each run still explores differently.
///
/// # Errors
/// Propagates the first error from any run; an invalid configuration fails
/// before the first run starts.
pub fn run_batch(config: &AcoConfig, repeats: usize) -> Result<BatchStats, AcoError> {
    if repeats == 0 {
        return Err(AcoError::InvalidConfiguration(
            "repeats must be at least 1".into(),
        ));
    }
    config.validate()?;

    let mut runs = Vec::with_capacity(repeats);
    for i in 0..repeats {
        let mut run_config = config.clone();
        if let Some(seed) = config.seed {
            run_config.seed = Some(seed.wrapping_add(i as u64));
        }
        let result = AcoRunner::run(&run_config)?;
        runs.push(result.stats());
    }

    let n = runs.len() as f64;
    let mean_fitness = runs.iter().map(|&(f, _)| f).sum::<f64>() / n;
    let min_fitness = runs.iter().map(|&(f, _)| f).fold(f64::INFINITY, f64::min);
    let max_fitness = runs
        .iter()
        .map(|&(f, _)| f)
        .fold(f64::NEG_INFINITY, f64::max);
    let total_runtime = runs.iter().map(|&(_, t)| t).sum::<f64>();

    Ok(BatchStats {
        runs,
        mean_fitness,
        min_fitness,
        max_fitness,
        mean_runtime: total_runtime / n,
        total_runtime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> AcoConfig {
        AcoConfig::new(2, vec![3.0, 1.0, 2.0, 4.0])
            .with_population_size(3)
            .with_construction_limit(9)
            .with_seed(11)
    }

    #[test]
    fn test_batch_collects_one_entry_per_run() {
        let stats = run_batch(&tiny_config(), 4).unwrap();
        assert_eq!(stats.runs.len(), 4);
    }

    #[test]
    fn test_aggregates_are_consistent() {
        let stats = run_batch(&tiny_config(), 5).unwrap();

        assert!(stats.min_fitness <= stats.mean_fitness);
        assert!(stats.mean_fitness <= stats.max_fitness);
        assert!(stats.min_fitness >= 0.0);

        let mean: f64 = stats.runs.iter().map(|&(f, _)| f).sum::<f64>() / 5.0;
        assert!((stats.mean_fitness - mean).abs() < 1e-12);
        assert!((stats.mean_runtime * 5.0 - stats.total_runtime).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let a = run_batch(&tiny_config(), 3).unwrap();
        let b = run_batch(&tiny_config(), 3).unwrap();
        let fitnesses =
            |s: &BatchStats| s.runs.iter().map(|&(f, _)| f).collect::<Vec<_>>();
        assert_eq!(fitnesses(&a), fitnesses(&b));
    }

    #[test]
    fn test_zero_repeats_rejected() {
        assert!(run_batch(&tiny_config(), 0).is_err());
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let config = AcoConfig::new(0, vec![1.0]);
        assert!(matches!(
            run_batch(&config, 2),
            Err(AcoError::InvalidConfiguration(_))
        ));
    }
}
