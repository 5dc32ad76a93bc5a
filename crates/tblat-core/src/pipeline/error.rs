use crate::core::models::finalized::DuplicateFamilyError;
use thiserror::Error;

/// Errors raised by modifier construction and application.
///
/// All of these are programmer or configuration errors: they are reported at
/// the point of detection, abort the current pass, and are never retried.
/// Partial mutation is not rolled back; callers rebuild from the original
/// builder output on failure.
#[derive(Debug, Error)]
pub enum ModifierError {
    #[error("min_neighbors must be non-negative, got {value}")]
    NegativeMinNeighbors { value: i32 },

    #[error("Hopping family registration failed: {source}")]
    DuplicateFamily {
        #[from]
        source: DuplicateFamilyError,
    },

    #[error(
        "Generator '{name}' returned mismatched index arrays: {from_len} 'from' vs {to_len} 'to'"
    )]
    MismatchedPairArrays {
        name: String,
        from_len: usize,
        to_len: usize,
    },

    #[error("Generator '{name}' returned site index {index}, out of range for {site_count} sites")]
    SiteIndexOutOfRange {
        name: String,
        index: usize,
        site_count: usize,
    },

    #[error("Generator '{name}' returned a self-pair at site {index}; on-site terms are not valid hoppings")]
    SelfPair { name: String, index: usize },
}
