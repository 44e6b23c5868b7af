//! Core data types: bins, routes, and per-generation statistics.
//!
//! Every instance owns freshly allocated state. Snapshots (used when a route
//! is recorded as the best solution) are plain deep clones, so later resets
//! of the live bins can never alter a recorded solution.

use std::fmt;

/// A bin accumulating assigned item weights.
///
/// Bins are unbounded: the problem is load balancing, not
/// packing-with-capacity, so [`add`](Bin::add) performs no capacity check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    /// Position of this bin in the bin set.
    pub index: usize,

    /// Sum of all item weights currently assigned to this bin.
    pub total_weight: f64,

    /// Item weights assigned to this bin, in assignment order.
    pub items: Vec<f64>,
}

impl Bin {
    /// Creates an empty bin with the given index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            total_weight: 0.0,
            items: Vec::new(),
        }
    }

    /// Assigns an item weight to this bin.
    pub fn add(&mut self, item_weight: f64) {
        self.items.push(item_weight);
        self.total_weight += item_weight;
    }

    /// Empties the bin and zeroes its total weight.
    pub fn reset(&mut self) {
        self.items.clear();
        self.total_weight = 0.0;
    }

    /// Number of items currently in the bin.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bin holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item count: {}; weight: {}; items: {:?}",
            self.items.len(),
            self.total_weight,
            self.items
        )
    }
}

/// One placement decision: `item` was assigned to `bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStep {
    /// Index of the chosen bin.
    pub bin: usize,

    /// Index of the item, in the fixed item-processing order.
    pub item: usize,
}

/// One complete candidate assignment of every item to a bin.
///
/// A route carries its fitness (spread of bin loads, lower is better) and a
/// snapshot of the bin configuration taken at construction completion, so it
/// remains valid after the live bins are reset for the next construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// One step per item, in item-processing order.
    pub steps: Vec<RouteStep>,

    /// Spread of bin loads (max − min). Valid once construction completes.
    pub fitness: f64,

    /// Snapshot of the bin configuration this route produced.
    pub bins: Vec<Bin>,
}

impl fmt::Display for Route {
    /// Formats the route as a placement chain, e.g.
    /// `item 1 in bin 0 -> item 2 in bin 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "item {} in bin {}", step.item + 1, step.bin)?;
            first = false;
        }
        Ok(())
    }
}

/// Fitness statistics for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Minimum fitness in the generation, divided by the total item weight.
    pub min_fitness_normalized: f64,

    /// Mean fitness across the generation's population.
    pub mean_fitness: f64,
}
