//! Ant Colony Optimization engine for multi-bin weight balancing.
//!
//! Distributes a fixed sequence of item weights across a fixed number of
//! bins so that the spread of bin loads (max − min) is minimized. A shared
//! pheromone graph — a 3D weight matrix keyed by (previous bin, item,
//! candidate bin) — guides probabilistic route construction; completed
//! routes reinforce the graph in proportion to their quality, and the whole
//! graph evaporates once per generation.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: problem instance and algorithm parameters, with eager
//!   validation.
//! - [`AcoRunner`]: executes the generation loop and enforces the
//!   construction budget.
//! - [`AcoResult`]: best route, per-generation statistics, and timing.
//! - [`PheromoneGraph`]: the bounds-checked 3D pheromone matrix.
//!
//! # Example
//!
//! ```
//! use aco_balance::{AcoConfig, AcoRunner};
//!
//! let config = AcoConfig::new(10, (1..=50).map(f64::from).collect())
//!     .with_population_size(20)
//!     .with_evaporation_factor(0.9)
//!     .with_construction_limit(1_000)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&config).unwrap();
//! println!("best fitness {} in {:?}", result.best_fitness, result.elapsed);
//! ```
//!
//! # Determinism
//!
//! Given the same seed and configuration, runs are bit-identical: one
//! uniform draw is made per item per construction, and per-member RNG seeds
//! are derived deterministically, so sequential and rayon-parallel
//! construction produce the same routes.

pub mod config;
pub mod construction;
pub mod error;
pub mod fitness;
pub mod graph;
pub mod harness;
pub mod instances;
pub mod runner;
pub mod selection;
pub mod types;

pub use config::{AcoConfig, FallbackPolicy};
pub use error::AcoError;
pub use graph::PheromoneGraph;
pub use harness::{run_batch, BatchStats};
pub use instances::{generate_items, ItemDistribution};
pub use runner::{AcoResult, AcoRunner};
pub use types::{Bin, GenerationStats, Route, RouteStep};
