//! Instrumented comparison sorts.
//!
//! Six classical algorithms that order records by a numeric key in
//! **descending** order (highest key first), counting key comparisons and
//! data movements as they go:
//!
//! - **Bubble sort**: full adjacent-exchange passes, no early exit.
//! - **Selection sort**: selects the maximum of the unsorted suffix.
//! - **Insertion sort**: shifts each element left past smaller keys.
//! - **Merge sort**: top-down split at `len / 2`, stable merge.
//! - **Quick sort**: Lomuto partition around the last element.
//! - **Randomized quick sort**: Lomuto partition around a uniformly random
//!   pivot drawn from an injected RNG.
//!
//! Counters are scoped to a single call; nothing persists between calls.
//! Counts are a per-implementation tally for display and are not a
//! uniform cost model across algorithms.
//!
//! Bubble, selection, insertion and merge sort are stable. The quick sort
//! variants are not.

mod engine;
mod merge;
mod quadratic;
mod quick;
mod types;

pub use engine::{sort, sort_by_id, sort_seeded};
pub use merge::merge_sort;
pub use quadratic::{bubble_sort, insertion_sort, selection_sort};
pub use quick::{quick_sort, randomized_quick_sort};
pub use types::{SortKey, SortResult, SortStats};
