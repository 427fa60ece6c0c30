//! Function learning configuration.
//!
//! [`LearningConfig`] holds the sampling parameters that shape the
//! training/testing split.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a function learning problem.
///
/// Only the training percentage is stored. The testing percentage is always
/// its complement, so the two can never disagree.
///
/// # Defaults
///
/// ```
/// use u_funclearn::learning::LearningConfig;
///
/// let config = LearningConfig::default();
/// assert_eq!(config.sample_set_size, 1000);
/// assert!((config.training_percentage - 0.7).abs() < 1e-10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_funclearn::learning::LearningConfig;
///
/// let config = LearningConfig::default()
///     .with_sample_set_size(500)
///     .with_training_percentage(0.8)
///     .with_seed(42);
/// assert!((config.testing_percentage() - 0.2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LearningConfig {
    /// Total number of points to sample, split between training and testing.
    pub sample_set_size: usize,

    /// Fraction of the sample set used for training, in `[0.0, 1.0]`.
    pub training_percentage: f64,

    /// Random seed for reproducible sampling.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether population evaluation runs in parallel.
    ///
    /// Only has an effect with the `parallel` feature enabled.
    pub parallel: bool,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            sample_set_size: 1000,
            training_percentage: 0.7,
            seed: None,
            parallel: true,
        }
    }
}

impl LearningConfig {
    /// Sets the total sample set size.
    pub fn with_sample_set_size(mut self, n: usize) -> Self {
        self.sample_set_size = n;
        self
    }

    /// Sets the training percentage.
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_training_percentage(mut self, pct: f64) -> Self {
        self.training_percentage = pct;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel population evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Fraction of the sample set held out for testing.
    pub fn testing_percentage(&self) -> f64 {
        1.0 - self.training_percentage
    }

    /// Target training set size before rounding.
    pub fn training_threshold(&self) -> f64 {
        self.sample_set_size as f64 * self.training_percentage
    }

    /// Target testing set size before rounding.
    pub fn testing_threshold(&self) -> f64 {
        self.sample_set_size as f64 * self.testing_percentage()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.training_percentage) {
            return Err(format!(
                "training_percentage must be in [0, 1], got {}",
                self.training_percentage
            ));
        }
        let testing = self.testing_percentage();
        if !(0.0..=1.0).contains(&testing) {
            return Err(format!(
                "testing_percentage must be in [0, 1], got {testing}"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LearningConfig::default();
        assert_eq!(config.sample_set_size, 1000);
        assert!((config.training_percentage - 0.7).abs() < 1e-10);
        assert!((config.testing_percentage() - 0.3).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LearningConfig::default()
            .with_sample_set_size(40)
            .with_training_percentage(0.25)
            .with_seed(7)
            .with_parallel(false);

        assert_eq!(config.sample_set_size, 40);
        assert!((config.training_percentage - 0.25).abs() < 1e-10);
        assert_eq!(config.seed, Some(7));
        assert!(!config.parallel);
        assert!((config.training_threshold() - 10.0).abs() < 1e-10);
        assert!((config.testing_threshold() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(LearningConfig::default().validate().is_ok());
        assert!(LearningConfig::default()
            .with_training_percentage(0.0)
            .validate()
            .is_ok());
        assert!(LearningConfig::default()
            .with_training_percentage(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(LearningConfig::default()
            .with_training_percentage(-0.1)
            .validate()
            .is_err());
        assert!(LearningConfig::default()
            .with_training_percentage(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_nan() {
        let config = LearningConfig::default().with_training_percentage(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_percentages_complementary() {
        for pct in [0.0, 0.1, 0.33, 0.5, 0.7, 0.99, 1.0] {
            let config = LearningConfig::default().with_training_percentage(pct);
            assert!((config.training_percentage + config.testing_percentage() - 1.0).abs() < 1e-12);
        }
    }
}
