//! Weighted index selection by cumulative threshold walk.
//!
//! Construction needs to pick a bin in proportion to its pheromone weight.
//! The routine here is separated from any RNG: it takes the weight sequence
//! and an already-drawn threshold, which keeps it deterministic and directly
//! unit-testable.

/// Selects an index from `weights` given a `threshold` in `[0, total)`.
///
/// Walks the weights in ascending index order, accumulating, and returns the
/// first index whose cumulative weight reaches or exceeds the threshold
/// (ties break toward the lower index).
///
/// Returns `None` if the weights sum to zero (or the sequence is empty), in
/// which case no index can reach any threshold; callers apply their
/// configured fallback policy. For `total > 0` and `threshold < total`, a
/// selection is guaranteed.
pub fn select_weighted(weights: &[f64], threshold: f64) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    let mut cumulative = 0.0;
    for (index, &w) in weights.iter().enumerate() {
        if cumulative + w >= threshold {
            return Some(index);
        }
        cumulative += w;
    }
    // threshold >= total; clamp to the last index.
    Some(weights.len() - 1)
}
