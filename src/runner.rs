//! Colony generation loop execution.
//!
//! [`AcoRunner`] orchestrates the complete run: graph initialization →
//! per-generation route construction → statistics → reinforcement →
//! evaporation, until the construction budget is spent.
//!
//! Every population member constructs against a frozen graph with its own
//! private bin set and a deterministically derived RNG, so a generation's
//! routes are independent and can be built in parallel; the graph is only
//! mutated after the whole generation is complete.

use crate::config::AcoConfig;
use crate::construction::construct_route;
use crate::error::AcoError;
use crate::graph::PheromoneGraph;
use crate::types::{Bin, GenerationStats, Route};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a completed colony run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The lowest-fitness route found across all generations, stored as an
    /// independent snapshot (its bin copies are decoupled from any live bin).
    pub best: Route,

    /// Fitness of the best route (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of route constructions performed. Generations run whole,
    /// so this can exceed the configured limit by up to one generation.
    pub constructions: usize,

    /// Number of complete generations executed.
    pub generations: usize,

    /// Whether the run ended early because a perfectly balanced route
    /// (fitness 0) was found.
    pub converged: bool,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Per-generation fitness statistics, in generation order.
    pub history: Vec<GenerationStats>,
}

impl AcoResult {
    /// Headline statistics: `(best fitness, runtime in seconds)`.
    pub fn stats(&self) -> (f64, f64) {
        (self.best_fitness, self.elapsed.as_secs_f64())
    }
}

/// Executes the colony generation loop.
///
/// # Usage
///
/// ```
/// use aco_balance::{AcoConfig, AcoRunner};
///
/// let config = AcoConfig::new(4, vec![5.0, 3.0, 2.0, 8.0, 1.0])
///     .with_population_size(10)
///     .with_construction_limit(200)
///     .with_seed(42);
/// let result = AcoRunner::run(&config).unwrap();
/// assert!(result.best_fitness >= 0.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony to completion.
    ///
    /// # Errors
    /// Returns [`AcoError::InvalidConfiguration`] for a structurally invalid
    /// config, or [`AcoError::ConstructionDeadlock`] if a zero pheromone
    /// column is hit under [`FallbackPolicy::Fail`](crate::FallbackPolicy::Fail).
    pub fn run(config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(config, |_, _| {})
    }

    /// Runs the colony, invoking `observer` with each generation's number
    /// and statistics as they are produced.
    ///
    /// The observer fills the role of logging: callers hook in progress
    /// reporting without the engine depending on any output mechanism.
    pub fn run_with_observer<F>(config: &AcoConfig, mut observer: F) -> Result<AcoResult, AcoError>
    where
        F: FnMut(usize, &GenerationStats),
    {
        config.validate()?;

        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let mut graph = PheromoneGraph::new(
            config.num_bins,
            config.items.len(),
            config.evaporation_factor,
            &mut rng,
        );
        let template: Vec<Bin> = (0..config.num_bins).map(Bin::new).collect();
        let total_item_weight = config.total_item_weight();

        let mut best: Option<Route> = None;
        let mut history = Vec::new();
        let mut constructions = 0usize;
        let mut generations = 0usize;
        let mut converged = false;

        while constructions < config.construction_limit {
            // Per-member RNG seeds are drawn sequentially from the master
            // stream, so sequential and parallel construction produce
            // identical routes.
            let seeds: Vec<u64> = (0..config.population_size).map(|_| rng.random()).collect();

            let build = |&seed: &u64| -> Result<Route, AcoError> {
                let mut member_rng = StdRng::seed_from_u64(seed);
                let mut bins = template.clone();
                construct_route(
                    &graph,
                    &mut bins,
                    &config.items,
                    config.fallback,
                    &mut member_rng,
                )
            };

            let population: Vec<Route> = if config.parallel {
                seeds.par_iter().map(build).collect::<Result<_, _>>()?
            } else {
                seeds.iter().map(build).collect::<Result<_, _>>()?
            };

            constructions += population.len();
            generations += 1;

            let min_fitness = population
                .iter()
                .map(|r| r.fitness)
                .fold(f64::INFINITY, f64::min);
            let mean_fitness =
                population.iter().map(|r| r.fitness).sum::<f64>() / population.len() as f64;
            let stats = GenerationStats {
                generation: generations,
                min_fitness_normalized: min_fitness / total_item_weight,
                mean_fitness,
            };
            observer(generations, &stats);
            history.push(stats);

            for route in &population {
                if best.as_ref().is_none_or(|b| route.fitness < b.fitness) {
                    best = Some(route.clone());
                }
            }

            // A perfectly balanced route is a terminal ideal: it cannot
            // reinforce (the deposit would divide by zero) and nothing can
            // improve on it.
            if min_fitness == 0.0 {
                converged = true;
                break;
            }

            for route in &population {
                graph.reinforce(route)?;
            }
            graph.evaporate();
        }

        let best = best.expect("construction_limit >= 1 runs at least one generation");
        Ok(AcoResult {
            best_fitness: best.fitness,
            best,
            constructions,
            generations,
            converged,
            elapsed: start.elapsed(),
            history,
        })
    }
}
