//! Student ranking.
//!
//! Builds student records from subject marks, runs one of the catalogued
//! sorts over them by total marks and assigns 1-based ranks, reporting the
//! sort's counters, wall-clock time and complexity profile alongside.

mod config;
mod runner;
mod types;

pub use config::RankingConfig;
pub use runner::{PerformanceStats, RankingResult, RankingRunner};
pub use types::{Grade, Marks, Roster, Student, MIN_NAME_LEN};
