//! Algorithm dispatch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::merge::merge_sort;
use super::quadratic::{bubble_sort, insertion_sort, selection_sort};
use super::quick::{quick_sort, randomized_quick_sort};
use super::types::{SortKey, SortResult, SortStats};
use crate::catalog::Algorithm;
use crate::error::Result;

/// Sorts `items` by descending key with the chosen algorithm.
///
/// `rng` is only drawn from by [`Algorithm::RandomizedQuickSort`]. Each
/// call starts from zeroed counters.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_rank::catalog::Algorithm;
/// use u_rank::sorting::sort;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = sort(Algorithm::BubbleSort, vec![70.0, 85.0, 60.0], &mut rng);
///
/// assert_eq!(result.sorted, vec![85.0, 70.0, 60.0]);
/// assert_eq!(result.comparisons(), 3);
/// ```
pub fn sort<T: SortKey, R: Rng>(
    algorithm: Algorithm,
    mut items: Vec<T>,
    rng: &mut R,
) -> SortResult<T> {
    let len = items.len();
    let mut stats = SortStats::default();

    let sorted = match algorithm {
        Algorithm::BubbleSort => {
            bubble_sort(&mut items, &mut stats);
            items
        }
        Algorithm::SelectionSort => {
            selection_sort(&mut items, &mut stats);
            items
        }
        Algorithm::InsertionSort => {
            insertion_sort(&mut items, &mut stats);
            items
        }
        Algorithm::MergeSort => merge_sort(items, &mut stats),
        Algorithm::QuickSort => {
            quick_sort(&mut items, &mut stats);
            items
        }
        Algorithm::RandomizedQuickSort => {
            randomized_quick_sort(&mut items, &mut stats, rng);
            items
        }
    };

    debug!(
        algorithm = algorithm.key(),
        len,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "sort finished"
    );

    SortResult { sorted, stats }
}

/// Like [`sort`], with the random source seeded from `seed`.
///
/// Identical inputs and seeds give identical counts for every algorithm.
pub fn sort_seeded<T: SortKey>(algorithm: Algorithm, items: Vec<T>, seed: u64) -> SortResult<T> {
    sort(algorithm, items, &mut StdRng::seed_from_u64(seed))
}

/// Like [`sort`], selecting the algorithm by its catalog key.
///
/// # Errors
///
/// Returns [`RankError::UnknownAlgorithm`](crate::RankError::UnknownAlgorithm)
/// for a key outside the catalog. No fallback algorithm is substituted.
pub fn sort_by_id<T: SortKey, R: Rng>(
    id: &str,
    items: Vec<T>,
    rng: &mut R,
) -> Result<SortResult<T>> {
    let algorithm: Algorithm = id.parse()?;
    Ok(sort(algorithm, items, rng))
}
