//! Ranking configuration.

use crate::catalog::Algorithm;

/// Configuration for a ranking run.
///
/// # Examples
///
/// ```
/// use u_rank::catalog::Algorithm;
/// use u_rank::ranking::RankingConfig;
///
/// let config = RankingConfig::default()
///     .with_algorithm(Algorithm::RandomizedQuickSort)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Sorting algorithm used to order students.
    pub algorithm: Algorithm,

    /// Maximum marks obtainable in a single subject.
    ///
    /// Percentages are computed against three times this value.
    pub max_marks_per_subject: f64,

    /// Random seed for the randomized quick sort. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            max_marks_per_subject: 100.0,
            seed: None,
        }
    }
}

impl RankingConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_marks_per_subject(mut self, max: f64) -> Self {
        self.max_marks_per_subject = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_marks_per_subject.is_finite() || self.max_marks_per_subject <= 0.0 {
            return Err(format!(
                "max_marks_per_subject must be finite and positive, got {}",
                self.max_marks_per_subject
            ));
        }
        Ok(())
    }
}
