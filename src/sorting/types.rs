//! Core types for the sorting engine.

/// A record that can be ordered by a single numeric key.
///
/// The engine orders by this key only, highest first. Everything else in
/// the record is payload and is moved, never inspected.
///
/// Keys must not be NaN.
///
/// # Examples
///
/// ```
/// use u_rank::sorting::SortKey;
///
/// struct Entry { total: f64, label: &'static str }
///
/// impl SortKey for Entry {
///     fn sort_key(&self) -> f64 { self.total }
/// }
/// ```
pub trait SortKey {
    /// Returns the key this record is ranked by.
    fn sort_key(&self) -> f64;
}

impl SortKey for f64 {
    fn sort_key(&self) -> f64 {
        *self
    }
}

impl SortKey for i32 {
    fn sort_key(&self) -> f64 {
        *self as f64
    }
}

impl<T: SortKey + ?Sized> SortKey for &T {
    fn sort_key(&self) -> f64 {
        (**self).sort_key()
    }
}

/// Operation counters for one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStats {
    /// Pairwise key comparisons performed.
    pub comparisons: usize,

    /// Data movements: exchanges, shifts or merge appends depending on the
    /// algorithm.
    pub swaps: usize,
}

impl SortStats {
    pub(crate) fn compare(&mut self) {
        self.comparisons += 1;
    }

    pub(crate) fn record_move(&mut self) {
        self.swaps += 1;
    }
}

/// Output of a sort call.
#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<T> {
    /// The input records, reordered by descending key.
    pub sorted: Vec<T>,

    /// Counters accumulated during this call.
    pub stats: SortStats,
}

impl<T> SortResult<T> {
    /// Number of key comparisons performed.
    pub fn comparisons(&self) -> usize {
        self.stats.comparisons
    }

    /// Number of data movements performed.
    pub fn swaps(&self) -> usize {
        self.stats.swaps
    }
}

impl<T: SortKey> SortResult<T> {
    /// Returns the keys of the sorted records, in order.
    pub fn keys(&self) -> Vec<f64> {
        self.sorted.iter().map(SortKey::sort_key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        total: f64,
    }

    impl SortKey for Rec {
        fn sort_key(&self) -> f64 {
            self.total
        }
    }

    #[test]
    fn test_primitive_keys() {
        assert_eq!(72.5f64.sort_key(), 72.5);
        assert_eq!((-3i32).sort_key(), -3.0);
    }

    #[test]
    fn test_reference_key_forwards() {
        fn key_of<K: SortKey>(k: K) -> f64 {
            k.sort_key()
        }

        let rec = Rec { total: 190.0 };
        assert_eq!(key_of(&rec), 190.0);
        assert_eq!(key_of(&&rec), 190.0);
    }

    #[test]
    fn test_result_accessors() {
        let result = SortResult {
            sorted: vec![3, 2, 1],
            stats: SortStats {
                comparisons: 3,
                swaps: 1,
            },
        };
        assert_eq!(result.comparisons(), 3);
        assert_eq!(result.swaps(), 1);
        assert_eq!(result.keys(), vec![3.0, 2.0, 1.0]);
    }
}
