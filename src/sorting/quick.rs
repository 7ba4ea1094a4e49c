//! Lomuto-partition quick sorts.
//!
//! Both variants partition around the element in the last slot: everything
//! with a strictly greater key is exchanged into a growing prefix, then the
//! pivot is exchanged into the slot after it. The randomized variant first
//! exchanges a uniformly chosen element into the last slot.
//!
//! # Reference
//!
//! Cormen et al. (2009), "Introduction to Algorithms", 3rd ed., §7.1 and §7.3.

use rand::Rng;

use super::types::{SortKey, SortStats};

/// Quick sort with the last element of each range as pivot, descending.
///
/// One comparison per element checked against the pivot. One swap per
/// exchange into the greater region, plus one for placing the pivot, which
/// is counted even when the pivot is already in place.
///
/// Already-descending input is the worst case for this pivot rule and
/// costs `n * (n - 1) / 2` comparisons.
pub fn quick_sort<T: SortKey>(mut items: &mut [T], stats: &mut SortStats) {
    while items.len() > 1 {
        let p = partition(items, stats);
        let (smaller, larger) = split_around(std::mem::take(&mut items), p);
        quick_sort(smaller, stats);
        items = larger;
    }
}

/// Quick sort with a pivot drawn uniformly from each range, descending.
///
/// Counting follows [`quick_sort`], plus one swap per range for moving the
/// chosen pivot into the last slot, even when the draw already picked it.
/// Counts depend on `rng`; seed it to reproduce them.
pub fn randomized_quick_sort<T: SortKey, R: Rng>(
    mut items: &mut [T],
    stats: &mut SortStats,
    rng: &mut R,
) {
    while items.len() > 1 {
        let high = items.len() - 1;
        let pivot = rng.random_range(0..=high);
        items.swap(pivot, high);
        stats.record_move();

        let p = partition(items, stats);
        let (smaller, larger) = split_around(std::mem::take(&mut items), p);
        randomized_quick_sort(smaller, stats, rng);
        items = larger;
    }
}

/// Splits `items` on both sides of the pivot at `p`, smaller side first.
///
/// Recursing into the smaller side and looping on the larger one bounds
/// the stack depth by `log2(n)` whatever the pivot choices.
fn split_around<T>(items: &mut [T], p: usize) -> (&mut [T], &mut [T]) {
    let (left, right) = items.split_at_mut(p);
    let right = &mut right[1..];
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

/// Partitions `items` around its last element and returns the pivot's
/// final index. `items` must be non-empty.
fn partition<T: SortKey>(items: &mut [T], stats: &mut SortStats) -> usize {
    let high = items.len() - 1;
    let pivot = items[high].sort_key();

    let mut store = 0;
    for j in 0..high {
        stats.compare();
        if items[j].sort_key() > pivot {
            items.swap(store, j);
            stats.record_move();
            store += 1;
        }
    }

    items.swap(store, high);
    stats.record_move();
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_descending(items: &[i32]) -> bool {
        items.windows(2).all(|w| w[0] >= w[1])
    }

    #[test]
    fn test_quick_three_students() {
        let mut items = vec![70.0, 85.0, 60.0];
        let mut stats = SortStats::default();
        quick_sort(&mut items, &mut stats);

        assert_eq!(items, vec![85.0, 70.0, 60.0]);
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 4);
    }

    #[test]
    fn test_quick_descending_input_is_quadratic() {
        for n in [2usize, 5, 20, 100] {
            let mut items: Vec<i32> = (0..n as i32).rev().collect();
            let mut stats = SortStats::default();
            quick_sort(&mut items, &mut stats);

            assert!(is_descending(&items));
            assert_eq!(stats.comparisons, n * (n - 1) / 2);
            // Partitions over lengths n, n-1, ..., 2; each swaps every
            // element including the pivot.
            assert_eq!(stats.swaps, n * (n + 1) / 2 - 1);
        }
    }

    #[test]
    fn test_quick_pivot_swap_always_counted() {
        let mut items = vec![3, 1];
        let mut stats = SortStats::default();
        quick_sort(&mut items, &mut stats);

        // 3 > 1 moves into place (self-exchange), pivot exchange counted too.
        assert_eq!(items, vec![3, 1]);
        assert_eq!(stats.comparisons, 1);
        assert_eq!(stats.swaps, 2);
    }

    #[test]
    fn test_quick_duplicates() {
        let mut items = vec![5, 5, 5, 5];
        let mut stats = SortStats::default();
        quick_sort(&mut items, &mut stats);

        assert_eq!(items, vec![5, 5, 5, 5]);
        assert_eq!(stats.comparisons, 6);
    }

    #[test]
    fn test_randomized_sorts() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<i32> = (0..200).map(|i| (i * 7919) % 257).collect();
        let mut stats = SortStats::default();
        randomized_quick_sort(&mut items, &mut stats, &mut rng);

        assert!(is_descending(&items));
        assert_eq!(items.len(), 200);
    }

    #[test]
    fn test_randomized_seed_reproducible() {
        let input: Vec<i32> = (0..64).map(|i| (i * 31) % 17).collect();

        let run = |seed: u64| {
            let mut items = input.clone();
            let mut stats = SortStats::default();
            randomized_quick_sort(&mut items, &mut stats, &mut StdRng::seed_from_u64(seed));
            (items, stats)
        };

        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_randomized_two_elements_counts() {
        // One range of length 2: pre-swap + one comparison + pivot swap,
        // plus at most one exchange into the greater region.
        for seed in 0..16 {
            let mut items = vec![1, 2];
            let mut stats = SortStats::default();
            randomized_quick_sort(&mut items, &mut stats, &mut StdRng::seed_from_u64(seed));

            assert_eq!(items, vec![2, 1]);
            assert_eq!(stats.comparisons, 1);
            assert!((2..=3).contains(&stats.swaps), "swaps = {}", stats.swaps);
        }
    }

    #[test]
    fn test_randomized_never_exceeds_fixed_worst_case() {
        let n = 120usize;
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mut items: Vec<i32> = (0..n as i32).rev().collect();
            let mut stats = SortStats::default();
            randomized_quick_sort(&mut items, &mut stats, &mut rng);
            assert!(stats.comparisons <= n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_randomized_average_is_n_log_n() {
        // Descending input is the fixed-pivot worst case; random pivots
        // should stay far below it on average.
        let n = 200usize;
        let trials = 50;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut total = 0usize;
        for _ in 0..trials {
            let mut items: Vec<i32> = (0..n as i32).rev().collect();
            let mut stats = SortStats::default();
            randomized_quick_sort(&mut items, &mut stats, &mut rng);
            total += stats.comparisons;
        }

        let mean = total as f64 / trials as f64;
        let n_log_n = n as f64 * (n as f64).log2();
        assert!(
            mean < 2.0 * n_log_n,
            "mean comparisons {mean} not within 2 n log2 n = {n_log_n}"
        );
        assert!(mean < (n * (n - 1) / 2) as f64 / 4.0);
    }

    /// Runs `f` on a thread whose stack is far too small for `n`-deep
    /// recursion at the sizes used below.
    fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
        std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(f)
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn test_quick_degenerate_inputs_bounded_depth() {
        let n = 10_000usize;
        on_small_stack(move || {
            let mut items: Vec<i32> = (0..n as i32).rev().collect();
            let mut stats = SortStats::default();
            quick_sort(&mut items, &mut stats);
            assert!(is_descending(&items));
            assert_eq!(stats.comparisons, n * (n - 1) / 2);

            let mut equal = vec![5; n];
            let mut stats = SortStats::default();
            quick_sort(&mut equal, &mut stats);
            assert_eq!(stats.comparisons, n * (n - 1) / 2);
        });
    }

    #[test]
    fn test_randomized_equal_keys_bounded_depth() {
        let n = 10_000usize;
        on_small_stack(move || {
            let mut items = vec![5; n];
            let mut stats = SortStats::default();
            randomized_quick_sort(&mut items, &mut stats, &mut StdRng::seed_from_u64(0));
            assert_eq!(items, vec![5; n]);
            assert_eq!(stats.comparisons, n * (n - 1) / 2);
        });
    }

    #[test]
    fn test_quick_trivial_inputs() {
        let mut stats = SortStats::default();
        let mut rng = StdRng::seed_from_u64(0);

        let mut empty: Vec<i32> = vec![];
        quick_sort(&mut empty, &mut stats);
        randomized_quick_sort(&mut empty, &mut stats, &mut rng);

        let mut single = vec![9];
        quick_sort(&mut single, &mut stats);
        randomized_quick_sort(&mut single, &mut stats, &mut rng);

        assert_eq!(single, vec![9]);
        assert_eq!(stats, SortStats::default());
    }
}
