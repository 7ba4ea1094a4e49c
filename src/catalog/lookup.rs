//! String-keyed catalog lookups.

use super::types::{Algorithm, AlgorithmComplexity};
use crate::error::Result;

/// An `(id, name)` pair as listed by [`list_available`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmEntry {
    /// The algorithm.
    pub id: Algorithm,
    /// Display name.
    pub name: &'static str,
}

/// Looks up the complexity profile of the algorithm with the given key.
///
/// # Errors
///
/// Returns [`RankError::UnknownAlgorithm`](crate::RankError::UnknownAlgorithm)
/// if `id` is not one of the six catalogued keys.
pub fn complexity_of(id: &str) -> Result<AlgorithmComplexity> {
    Ok(id.parse::<Algorithm>()?.complexity())
}

/// Lists every algorithm in declaration order.
pub fn list_available() -> Vec<AlgorithmEntry> {
    Algorithm::ALL
        .into_iter()
        .map(|id| AlgorithmEntry {
            id,
            name: id.name(),
        })
        .collect()
}
