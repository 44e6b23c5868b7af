//! Domain error kinds for the colony engine.
//!
//! All fallible operations in this crate report one of the variants of
//! [`AcoError`]. Configuration problems are caught eagerly by
//! [`AcoConfig::validate`](crate::AcoConfig::validate) before a run starts;
//! the remaining variants describe defined algorithmic edge cases, never
//! internal failures.

use std::fmt;

/// Errors produced by the colony engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    /// The configuration is structurally invalid (zero bins, no items,
    /// evaporation factor outside `[0, 1]`, ...). Raised by
    /// [`AcoConfig::validate`](crate::AcoConfig::validate), never mid-run.
    InvalidConfiguration(String),

    /// A route with fitness 0 (perfect balance) was offered for pheromone
    /// reinforcement. The deposit is `100.0 / fitness`, so a zero-fitness
    /// route cannot reinforce; callers treat it as a terminal ideal instead.
    DegenerateSolution,

    /// During construction, the pheromone column for `item` summed to zero
    /// and the configured fallback policy was
    /// [`FallbackPolicy::Fail`](crate::FallbackPolicy::Fail).
    ConstructionDeadlock {
        /// Index of the item whose candidate-bin column was all zero.
        item: usize,
    },
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcoError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            AcoError::DegenerateSolution => {
                write!(f, "cannot reinforce a route with fitness 0 (perfect balance)")
            }
            AcoError::ConstructionDeadlock { item } => {
                write!(
                    f,
                    "pheromone column for item {item} sums to zero and no fallback is configured"
                )
            }
        }
    }
}

impl std::error::Error for AcoError {}
