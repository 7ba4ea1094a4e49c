//! Instrumented classical sorting for ranking student records.
//!
//! Provides six comparison sorts that order records by a single numeric
//! key, highest first, while counting comparisons and data movements:
//!
//! - **Catalog**: Display names and best/average/worst time and space
//!   complexity for each algorithm, keyed by a closed [`catalog::Algorithm`]
//!   enum or its camelCase string identifier.
//! - **Sorting**: Bubble, selection, insertion, merge, quick and randomized
//!   quick sort over any [`sorting::SortKey`] record, returning the sorted
//!   records with per-call counters. Randomness is injected, so seeded runs
//!   reproduce exact counts.
//! - **Ranking**: Student records built from subject marks, ranked by total
//!   marks with timing and complexity reported alongside.
//!
//! # Architecture
//!
//! The sorting engine is stateless: every call owns its input and its
//! counters, and nothing is shared between calls. Dispatch over algorithms
//! is an exhaustive `match` on [`catalog::Algorithm`].

pub mod catalog;
pub mod error;
pub mod ranking;
pub mod sorting;

pub use error::{RankError, Result};
