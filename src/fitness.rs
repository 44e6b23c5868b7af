//! Fitness evaluation over final bin loads.

use crate::types::Bin;

/// Fitness of a completed assignment: spread of the bin total weights,
/// `max − min`. Lower is better; 0 means perfectly balanced.
///
/// Pure and O(number of bins). Returns 0.0 for an empty bin set (rejected by
/// configuration validation before any run).
pub fn evaluate(bins: &[Bin]) -> f64 {
    let Some(first) = bins.first() else {
        return 0.0;
    };

    let mut max_weight = first.total_weight;
    let mut min_weight = first.total_weight;
    for bin in bins {
        if bin.total_weight > max_weight {
            max_weight = bin.total_weight;
        }
        if bin.total_weight < min_weight {
            min_weight = bin.total_weight;
        }
    }
    max_weight - min_weight
}
