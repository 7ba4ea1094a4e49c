//! Top-down merge sort.

use super::types::{SortKey, SortStats};

/// Merge sort, descending by key.
///
/// Splits at `len / 2`, sorts both halves recursively and merges them by
/// repeatedly taking the larger front element. On equal keys the left
/// front wins, so the sort is stable.
///
/// Counting:
/// - one comparison per front-to-front comparison while both halves are
///   non-empty;
/// - one swap per element appended by that loop, plus one per element
///   copied from the leftover half afterwards.
///
/// Every element is therefore counted exactly once per merge it takes
/// part in. Sequences of length `<= 1` are returned untouched.
pub fn merge_sort<T: SortKey>(items: Vec<T>, stats: &mut SortStats) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);

    let left = merge_sort(left, stats);
    let right = merge_sort(right, stats);
    merge(left, right, stats)
}

fn merge<T: SortKey>(left: Vec<T>, right: Vec<T>, stats: &mut SortStats) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.sort_key() >= r.sort_key(),
            _ => break,
        };
        stats.compare();
        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
        stats.record_move();
    }

    stats.swaps += left.len() + right.len();
    merged.extend(left);
    merged.extend(right);
    merged
}
