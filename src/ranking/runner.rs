//! Ranking execution.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info_span};

use super::config::RankingConfig;
use super::types::Student;
use crate::catalog::{Algorithm, AlgorithmComplexity};
use crate::error::{RankError, Result};
use crate::sorting;

/// Counters, timing and complexity profile of one ranking run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerformanceStats {
    /// Algorithm that produced the ranking.
    pub algorithm: Algorithm,

    /// Wall-clock time spent inside the sort.
    pub execution_time: Duration,

    /// Key comparisons performed by the sort.
    pub comparisons: usize,

    /// Data movements performed by the sort.
    pub swaps: usize,

    /// Catalogued complexity of `algorithm`.
    pub complexity: AlgorithmComplexity,
}

/// Result of a ranking run.
#[derive(Debug, Clone)]
pub struct RankingResult {
    /// Students ordered by descending total marks with `rank` filled in.
    pub ranked: Vec<Student>,

    /// Performance of the sort that produced `ranked`.
    pub stats: PerformanceStats,
}

/// Ranks students by total marks.
pub struct RankingRunner;

impl RankingRunner {
    /// Ranks a copy of `students` with the configured algorithm.
    ///
    /// The random source is seeded from `config.seed`, or from a fresh
    /// random seed when unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rank::catalog::Algorithm;
    /// use u_rank::ranking::{Marks, RankingConfig, RankingRunner, Student};
    ///
    /// let students = vec![
    ///     Student::new("Asha", "R1", Marks::new(20.0, 25.0, 25.0), 100.0).unwrap(),
    ///     Student::new("Ben", "R2", Marks::new(30.0, 30.0, 25.0), 100.0).unwrap(),
    ///     Student::new("Chen", "R3", Marks::new(20.0, 20.0, 20.0), 100.0).unwrap(),
    /// ];
    /// let config = RankingConfig::default().with_algorithm(Algorithm::BubbleSort);
    ///
    /// let result = RankingRunner::run(&students, &config).unwrap();
    /// assert_eq!(result.ranked[0].roll_number, "R2");
    /// assert_eq!(result.ranked[0].rank, Some(1));
    /// assert_eq!(result.stats.comparisons, 3);
    /// ```
    pub fn run(students: &[Student], config: &RankingConfig) -> Result<RankingResult> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(students, config, &mut rng)
    }

    /// Ranks a copy of `students`, drawing pivots from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        students: &[Student],
        config: &RankingConfig,
        rng: &mut R,
    ) -> Result<RankingResult> {
        config.validate().map_err(RankError::InvalidConfig)?;

        let algorithm = config.algorithm;
        let span = info_span!("rank", algorithm = algorithm.key(), students = students.len());
        let _guard = span.enter();

        let start = Instant::now();
        let result = sorting::sort(algorithm, students.to_vec(), rng);
        let execution_time = start.elapsed();

        let ranked: Vec<Student> = result
            .sorted
            .into_iter()
            .enumerate()
            .map(|(i, mut student)| {
                student.rank = Some(i + 1);
                student
            })
            .collect();

        debug!(
            elapsed_us = execution_time.as_micros() as u64,
            comparisons = result.stats.comparisons,
            swaps = result.stats.swaps,
            "ranking complete"
        );

        Ok(RankingResult {
            ranked,
            stats: PerformanceStats {
                algorithm,
                execution_time,
                comparisons: result.stats.comparisons,
                swaps: result.stats.swaps,
                complexity: algorithm.complexity(),
            },
        })
    }
}
