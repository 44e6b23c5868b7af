//! Deterministic problem-instance generators.
//!
//! These produce the item-weight sequences used by the experiment harness
//! and benchmarks. All generators are deterministic functions of `n`.

/// Shape of a generated item-weight sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemDistribution {
    /// Weights 1, 2, ..., n.
    Ascending,

    /// Weights ⌊i²/2⌋ for i = 1..=n, clamped below at 1 so every generated
    /// instance validates. Skews the mass heavily toward the tail.
    Scaled,

    /// All weights 1. Every balanced assignment has fitness 0 when n is a
    /// multiple of the bin count.
    Unit,
}

/// Generates `n` item weights following `distribution`.
pub fn generate_items(distribution: ItemDistribution, n: usize) -> Vec<f64> {
    match distribution {
        ItemDistribution::Ascending => (1..=n).map(|i| i as f64).collect(),
        ItemDistribution::Scaled => (1..=n).map(|i| (((i * i) / 2) as f64).max(1.0)).collect(),
        ItemDistribution::Unit => vec![1.0; n],
    }
}
