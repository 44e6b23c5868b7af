//! Pheromone graph: the shared 3D weight matrix guiding construction.
//!
//! Entry `(p, i, b)` holds the desirability of placing item `i` into bin `b`
//! given the previous placement went into bin `p`. The matrix is stored as a
//! flat `Vec<f64>` with the candidate-bin axis fastest-varying, so the
//! weights consulted for one decision (`column`) form a contiguous slice.
//!
//! Within a generation the graph is read-only during all constructions and
//! mutated only afterwards: one [`reinforce`](PheromoneGraph::reinforce) pass
//! per route, then exactly one [`evaporate`](PheromoneGraph::evaporate).

use crate::error::AcoError;
use crate::types::Route;
use rand::Rng;

/// Pheromone quantity divided by route fitness on each reinforcement.
pub const PHEROMONE_DEPOSIT: f64 = 100.0;

/// Bin index treated as the previous bin for the first item of every route.
pub const SENTINEL_BIN: usize = 0;

/// 3D pheromone weight matrix of shape `[num_bins][num_items][num_bins]`.
///
/// All entries are non-negative. The matrix is mutated only by reinforcement
/// (additive) and evaporation (multiplicative), and created once per run with
/// independent uniform random weights in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct PheromoneGraph {
    weights: Vec<f64>,
    num_bins: usize,
    num_items: usize,
    retention: f64,
}

impl PheromoneGraph {
    /// Allocates the matrix and fills every entry with an independent uniform
    /// random value in `[0, 1)`.
    ///
    /// `retention` is the multiplier applied by [`evaporate`](Self::evaporate):
    /// 1.0 preserves all pheromone, 0.0 clears the graph.
    pub fn new<R: Rng>(num_bins: usize, num_items: usize, retention: f64, rng: &mut R) -> Self {
        let len = num_bins * num_items * num_bins;
        let weights = (0..len).map(|_| rng.random_range(0.0..1.0)).collect();
        Self {
            weights,
            num_bins,
            num_items,
            retention,
        }
    }

    /// Allocates the matrix with every entry set to `value`.
    ///
    /// Mainly useful for tests that need a hand-crafted starting state.
    pub fn filled(num_bins: usize, num_items: usize, retention: f64, value: f64) -> Self {
        Self {
            weights: vec![value; num_bins * num_items * num_bins],
            num_bins,
            num_items,
            retention,
        }
    }

    /// Number of bins along the previous-bin and candidate-bin axes.
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Number of items along the middle axis.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    fn index(&self, prev_bin: usize, item: usize, bin: usize) -> usize {
        assert!(prev_bin < self.num_bins, "prev_bin {prev_bin} out of bounds");
        assert!(item < self.num_items, "item {item} out of bounds");
        assert!(bin < self.num_bins, "bin {bin} out of bounds");
        (prev_bin * self.num_items + item) * self.num_bins + bin
    }

    /// Returns the weight at `(prev_bin, item, bin)`.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub fn get(&self, prev_bin: usize, item: usize, bin: usize) -> f64 {
        self.weights[self.index(prev_bin, item, bin)]
    }

    /// Sets the weight at `(prev_bin, item, bin)`.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub fn set(&mut self, prev_bin: usize, item: usize, bin: usize, weight: f64) {
        let idx = self.index(prev_bin, item, bin);
        self.weights[idx] = weight;
    }

    /// The candidate-bin weight column for one decision: all weights
    /// `(prev_bin, item, *)` as a contiguous slice of length `num_bins`.
    pub fn column(&self, prev_bin: usize, item: usize) -> &[f64] {
        let start = self.index(prev_bin, item, 0);
        &self.weights[start..start + self.num_bins]
    }

    /// Deposits pheromone along every edge walked by `route`.
    ///
    /// Each traversed edge `(previous_bin, item, bin)` gains
    /// `PHEROMONE_DEPOSIT / fitness`, with the previous bin starting at
    /// [`SENTINEL_BIN`]. Lower-fitness (better) routes deposit more.
    ///
    /// # Errors
    /// Returns [`AcoError::DegenerateSolution`] if the route's fitness is 0:
    /// a perfectly balanced route is a terminal ideal, not a reinforcement.
    pub fn reinforce(&mut self, route: &Route) -> Result<(), AcoError> {
        if route.fitness == 0.0 {
            return Err(AcoError::DegenerateSolution);
        }

        let deposit = PHEROMONE_DEPOSIT / route.fitness;
        let mut prev_bin = SENTINEL_BIN;
        for step in &route.steps {
            let idx = self.index(prev_bin, step.item, step.bin);
            self.weights[idx] += deposit;
            prev_bin = step.bin;
        }
        Ok(())
    }

    /// Multiplies every entry by the retention factor.
    ///
    /// Applied exactly once per generation, after all reinforcements.
    pub fn evaporate(&mut self) {
        for w in &mut self.weights {
            *w *= self.retention;
        }
    }
}
