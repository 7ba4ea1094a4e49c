//! Quadratic in-place sorts: bubble, selection and insertion.

use super::types::{SortKey, SortStats};

/// Bubble sort, descending by key.
///
/// Runs every pass over the remaining range even when the slice is already
/// ordered, so the comparison count is always `n * (n - 1) / 2`. One swap is
/// counted per exchanged adjacent pair.
pub fn bubble_sort<T: SortKey>(items: &mut [T], stats: &mut SortStats) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            stats.compare();
            if items[j].sort_key() < items[j + 1].sort_key() {
                items.swap(j, j + 1);
                stats.record_move();
            }
        }
    }
}

/// Selection sort, descending by key.
///
/// Scans the unsorted suffix for its first maximum. The maximum is moved to
/// the front of the suffix by rotating the intervening block right by one,
/// which keeps equal keys in input order. A swap is counted only when the
/// maximum is not already in place.
pub fn selection_sort<T: SortKey>(items: &mut [T], stats: &mut SortStats) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut max_idx = i;
        for j in (i + 1)..n {
            stats.compare();
            if items[j].sort_key() > items[max_idx].sort_key() {
                max_idx = j;
            }
        }
        if max_idx != i {
            items[i..=max_idx].rotate_right(1);
            stats.record_move();
        }
    }
}

/// Insertion sort, descending by key.
///
/// Every probe of the left neighbour is a comparison, including the one
/// that stops the shift. Every leftward step of the current element is a
/// swap; settling into the final slot is not counted separately.
pub fn insertion_sort<T: SortKey>(items: &mut [T], stats: &mut SortStats) {
    for i in 1..items.len() {
        let key = items[i].sort_key();
        let mut j = i;
        while j > 0 {
            stats.compare();
            if items[j - 1].sort_key() < key {
                items.swap(j - 1, j);
                stats.record_move();
                j -= 1;
            } else {
                break;
            }
        }
    }
}
