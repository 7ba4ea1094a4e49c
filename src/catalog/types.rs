//! Algorithm identifiers and complexity metadata.

use std::fmt;
use std::str::FromStr;

use crate::error::RankError;

/// Asymptotic cost profile of a sorting algorithm.
///
/// Labels are display strings such as `"O(n log n)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmComplexity {
    /// Human-readable algorithm name.
    pub name: &'static str,
    /// Best-case time complexity.
    pub best: &'static str,
    /// Average-case time complexity.
    pub average: &'static str,
    /// Worst-case time complexity.
    pub worst: &'static str,
    /// Auxiliary space complexity.
    pub space: &'static str,
}

/// Short prose explanation of an algorithm for display alongside its
/// counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmExplanation {
    /// Display title, identical to [`AlgorithmComplexity::name`].
    pub title: &'static str,
    /// How the algorithm works.
    pub description: &'static str,
    /// When the algorithm is a good choice.
    pub use_case: &'static str,
}

/// One of the six sorting algorithms the engine can run.
///
/// The set is closed: dispatch over it is an exhaustive `match`, so adding
/// a variant forces every dispatch site to handle it.
///
/// String identifiers use camelCase keys (`"bubbleSort"`, `"quickSort"`, ...).
///
/// # Examples
///
/// ```
/// use u_rank::catalog::Algorithm;
///
/// let algo: Algorithm = "mergeSort".parse().unwrap();
/// assert_eq!(algo, Algorithm::MergeSort);
/// assert_eq!(algo.complexity().worst, "O(n log n)");
/// assert!("shellSort".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Algorithm {
    /// Adjacent-exchange passes without early exit.
    #[default]
    BubbleSort,
    /// Repeatedly selects the maximum of the unsorted suffix.
    SelectionSort,
    /// Shifts each element left past smaller keys.
    InsertionSort,
    /// Top-down recursive merge sort.
    MergeSort,
    /// Lomuto partition with the last element as pivot.
    QuickSort,
    /// Lomuto partition with a uniformly random pivot.
    RandomizedQuickSort,
}

impl Algorithm {
    /// All algorithms in declaration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::RandomizedQuickSort,
    ];

    /// Returns the camelCase identifier of this algorithm.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubbleSort",
            Algorithm::SelectionSort => "selectionSort",
            Algorithm::InsertionSort => "insertionSort",
            Algorithm::MergeSort => "mergeSort",
            Algorithm::QuickSort => "quickSort",
            Algorithm::RandomizedQuickSort => "randomizedQuickSort",
        }
    }

    /// Returns the display name of this algorithm.
    pub fn name(self) -> &'static str {
        self.complexity().name
    }

    /// Returns the complexity profile of this algorithm.
    pub fn complexity(self) -> AlgorithmComplexity {
        match self {
            Algorithm::BubbleSort => AlgorithmComplexity {
                name: "Bubble Sort",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::SelectionSort => AlgorithmComplexity {
                name: "Selection Sort",
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::InsertionSort => AlgorithmComplexity {
                name: "Insertion Sort",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::MergeSort => AlgorithmComplexity {
                name: "Merge Sort",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::QuickSort => AlgorithmComplexity {
                name: "Quick Sort",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
            Algorithm::RandomizedQuickSort => AlgorithmComplexity {
                name: "Randomized Quick Sort",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
        }
    }

    /// Returns the prose explanation of this algorithm.
    pub fn explanation(self) -> AlgorithmExplanation {
        let (description, use_case) = match self {
            Algorithm::BubbleSort => (
                "Walks the list repeatedly, comparing each adjacent pair and \
                 exchanging them when they are out of order, until a full set \
                 of passes has been made.",
                "Teaching and very small, nearly ordered inputs, where its \
                 simplicity outweighs its quadratic cost.",
            ),
            Algorithm::SelectionSort => (
                "Grows a sorted prefix one slot at a time by finding the \
                 largest key in the unsorted remainder and moving it to the \
                 front of that remainder.",
                "Situations where moves are expensive: it performs at most \
                 n - 1 placements (O(n)).",
            ),
            Algorithm::InsertionSort => (
                "Takes each element in turn and shifts it left past the \
                 elements with smaller keys until it reaches its place in the \
                 already sorted prefix.",
                "Small or mostly sorted inputs. It is adaptive and stable.",
            ),
            Algorithm::MergeSort => (
                "Divide and conquer: splits the list into halves, sorts each \
                 half recursively and merges the two sorted halves into one.",
                "A guaranteed O(n log n) bound with stability, at the price of \
                 O(n) extra space. Well suited to linked data.",
            ),
            Algorithm::QuickSort => (
                "Divide and conquer: takes the last element as pivot, moves \
                 every larger key in front of it and the rest behind it, then \
                 sorts both sides.",
                "Fast on average for in-memory arrays, often beating other \
                 O(n log n) sorts in practice.",
            ),
            Algorithm::RandomizedQuickSort => (
                "Quick sort with the pivot drawn uniformly at random from the \
                 range, so no fixed input ordering reliably triggers the \
                 O(n²) worst case.",
                "Arbitrary inputs where the plain pivot rule could degrade: \
                 O(n log n) is expected with high probability.",
            ),
        };

        AlgorithmExplanation {
            title: self.name(),
            description,
            use_case,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| RankError::UnknownAlgorithm(s.to_string()))
    }
}
