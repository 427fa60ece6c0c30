//! Training/testing dataset construction.
//!
//! [`DatasetBuilder`] samples the objective function's domain twice, once for
//! the training set and once for the held-out testing set, and folds the
//! largest observed function value over both passes.

use super::config::LearningConfig;
use super::sampler::RandomSampler;
use super::types::{DomainBound, ObjectiveFunction, SamplePoint};
use crate::error::{LearningError, Result};
use rand::Rng;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sampled point together with the function's raw value there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Input coordinates.
    pub point: SamplePoint,

    /// Raw (unscaled) objective function output at `point`.
    pub target: f64,
}

/// The fixed train/test split of a function learning problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    /// Samples used to compute training fitness.
    pub training: Vec<Sample>,

    /// Held-out samples used for generalization error.
    pub testing: Vec<Sample>,

    /// Largest raw target across both sets.
    ///
    /// `f64::NEG_INFINITY` when nothing was sampled.
    pub function_max_value: f64,
}

impl Dataset {
    /// Total number of samples across both sets.
    pub fn len(&self) -> usize {
        self.training.len() + self.testing.len()
    }

    /// Returns `true` when neither set holds a sample.
    pub fn is_empty(&self) -> bool {
        self.training.is_empty() && self.testing.is_empty()
    }
}

/// Builds the training and testing sets for an objective function.
pub struct DatasetBuilder;

impl DatasetBuilder {
    /// Samples both sets.
    ///
    /// Each set is grown one point at a time while its size is below its
    /// fractional threshold (`sample_set_size * percentage`), so it ends at
    /// the ceiling of that threshold.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::Configuration`] if the configuration is
    /// invalid or the function declares no usable domain bound. Nothing is
    /// sampled in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use u_funclearn::learning::{DatasetBuilder, DomainBound, LearningConfig, ObjectiveFunction};
    ///
    /// struct Square { bounds: [DomainBound; 1] }
    ///
    /// impl ObjectiveFunction for Square {
    ///     fn dimension(&self) -> usize { 1 }
    ///     fn bounds(&self) -> &[DomainBound] { &self.bounds }
    ///     fn evaluate(&self, p: &[f64]) -> f64 { p[0] * p[0] }
    /// }
    ///
    /// let f = Square { bounds: [DomainBound::new(0.0, 2.0)] };
    /// let config = LearningConfig::default().with_sample_set_size(10).with_training_percentage(0.6);
    /// let dataset = DatasetBuilder::build(&f, &config, &mut StdRng::seed_from_u64(3)).unwrap();
    /// assert_eq!(dataset.training.len(), 6);
    /// assert_eq!(dataset.testing.len(), 4);
    /// ```
    pub fn build<F, R>(function: &F, config: &LearningConfig, rng: &mut R) -> Result<Dataset>
    where
        F: ObjectiveFunction + ?Sized,
        R: Rng + ?Sized,
    {
        config.validate().map_err(LearningError::Configuration)?;
        first_bound(function)?;

        let (training, training_max) =
            sample_pass(function, config.training_threshold(), rng, "training")?;
        let (testing, testing_max) =
            sample_pass(function, config.testing_threshold(), rng, "testing")?;
        let function_max_value = training_max.max(testing_max);

        info!(
            training = training.len(),
            testing = testing.len(),
            function_max_value,
            "dataset constructed"
        );
        if !training.is_empty() && function_max_value <= 0.0 {
            warn!(
                function_max_value,
                "non-positive maximum; scaled training fitness will be degenerate or sign-flipped"
            );
        }

        Ok(Dataset {
            training,
            testing,
            function_max_value,
        })
    }
}

/// Resolves the domain component every coordinate is sampled from.
fn first_bound<F: ObjectiveFunction + ?Sized>(function: &F) -> Result<DomainBound> {
    let bound = function.bounds().first().copied().ok_or_else(|| {
        LearningError::Configuration("objective function declares no domain component".into())
    })?;
    bound.validate().map_err(LearningError::Configuration)?;
    Ok(bound)
}

/// Grows one set until it reaches `threshold`, returning it with its maximum target.
fn sample_pass<F, R>(
    function: &F,
    threshold: f64,
    rng: &mut R,
    label: &str,
) -> Result<(Vec<Sample>, f64)>
where
    F: ObjectiveFunction + ?Sized,
    R: Rng + ?Sized,
{
    let bound = first_bound(function)?;
    let dimension = function.dimension();
    let mut samples = Vec::with_capacity(threshold.max(0.0).ceil() as usize);

    while (samples.len() as f64) < threshold {
        let point = RandomSampler::sample(dimension, bound, rng);
        let target = function.evaluate(&point);
        samples.push(Sample { point, target });
    }

    let max = samples
        .iter()
        .map(|s| s.target)
        .fold(f64::NEG_INFINITY, f64::max);
    debug!(set = label, size = samples.len(), threshold, max, "sampling pass done");

    Ok((samples, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct SumFunction {
        dim: usize,
        bounds: Vec<DomainBound>,
    }

    impl SumFunction {
        fn new(dim: usize, lower: f64, upper: f64) -> Self {
            Self {
                dim,
                bounds: vec![DomainBound::new(lower, upper)],
            }
        }
    }

    impl ObjectiveFunction for SumFunction {
        fn dimension(&self) -> usize {
            self.dim
        }
        fn bounds(&self) -> &[DomainBound] {
            &self.bounds
        }
        fn evaluate(&self, point: &[f64]) -> f64 {
            point.iter().sum()
        }
    }

    fn config(size: usize, pct: f64) -> LearningConfig {
        LearningConfig::default()
            .with_sample_set_size(size)
            .with_training_percentage(pct)
    }

    #[test]
    fn test_small_even_split() {
        let f = SumFunction::new(1, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let ds = DatasetBuilder::build(&f, &config(4, 0.5), &mut rng).unwrap();

        assert_eq!(ds.training.len(), 2);
        assert_eq!(ds.testing.len(), 2);
        assert!(ds.function_max_value >= 0.0);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn test_default_split_sizes() {
        // 1000 * 0.7 = 700 exactly; 1000 * (1 - 0.7) is slightly above 300.
        let f = SumFunction::new(2, -1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let ds = DatasetBuilder::build(&f, &LearningConfig::default(), &mut rng).unwrap();

        assert_eq!(ds.training.len(), 700);
        let expected_testing = (1000.0 * (1.0 - 0.7_f64)).ceil() as usize;
        assert_eq!(ds.testing.len(), expected_testing);
    }

    #[test]
    fn test_fractional_threshold_rounds_up() {
        let f = SumFunction::new(1, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let ds = DatasetBuilder::build(&f, &config(5, 0.5), &mut rng).unwrap();
        assert_eq!(ds.training.len(), 3);
        assert_eq!(ds.testing.len(), 3);
    }

    #[test]
    fn test_empty_sample_set() {
        let f = SumFunction::new(3, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let ds = DatasetBuilder::build(&f, &config(0, 0.7), &mut rng).unwrap();

        assert!(ds.is_empty());
        assert_eq!(ds.function_max_value, f64::NEG_INFINITY);
    }

    #[test]
    fn test_all_training() {
        let f = SumFunction::new(1, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let ds = DatasetBuilder::build(&f, &config(10, 1.0), &mut rng).unwrap();
        assert_eq!(ds.training.len(), 10);
        assert!(ds.testing.is_empty());
    }

    #[test]
    fn test_points_have_function_dimension() {
        let f = SumFunction::new(4, -2.0, 2.0);
        let mut rng = StdRng::seed_from_u64(8);
        let ds = DatasetBuilder::build(&f, &config(20, 0.5), &mut rng).unwrap();
        assert!(ds
            .training
            .iter()
            .chain(&ds.testing)
            .all(|s| s.point.len() == 4));
    }

    #[test]
    fn test_targets_match_function() {
        let f = SumFunction::new(2, 0.0, 5.0);
        let mut rng = StdRng::seed_from_u64(11);
        let ds = DatasetBuilder::build(&f, &config(30, 0.6), &mut rng).unwrap();
        for s in ds.training.iter().chain(&ds.testing) {
            assert!((s.target - f.evaluate(&s.point)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_percentage_rejected() {
        let f = SumFunction::new(1, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let err = DatasetBuilder::build(&f, &config(10, 1.2), &mut rng).unwrap_err();
        assert!(matches!(err, LearningError::Configuration(_)));
    }

    #[test]
    fn test_missing_domain_rejected() {
        let f = SumFunction {
            dim: 1,
            bounds: vec![],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let err = DatasetBuilder::build(&f, &config(10, 0.5), &mut rng).unwrap_err();
        assert!(matches!(err, LearningError::Configuration(_)));
    }

    #[test]
    fn test_only_first_component_used() {
        // Second component would allow values up to 100; only [0, 1] applies.
        let f = SumFunction {
            dim: 2,
            bounds: vec![DomainBound::new(0.0, 1.0), DomainBound::new(0.0, 100.0)],
        };
        let mut rng = StdRng::seed_from_u64(21);
        let ds = DatasetBuilder::build(&f, &config(200, 0.5), &mut rng).unwrap();
        assert!(ds
            .training
            .iter()
            .chain(&ds.testing)
            .flat_map(|s| s.point.iter())
            .all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_reproducible_with_seed() {
        let f = SumFunction::new(2, -1.0, 1.0);
        let a = DatasetBuilder::build(&f, &config(50, 0.7), &mut StdRng::seed_from_u64(77)).unwrap();
        let b = DatasetBuilder::build(&f, &config(50, 0.7), &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_split_sizes_cover_sample_set(
            size in 0usize..300,
            pct in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let f = SumFunction::new(1, -1.0, 1.0);
            let mut rng = StdRng::seed_from_u64(seed);
            let ds = DatasetBuilder::build(&f, &config(size, pct), &mut rng).unwrap();

            let total = ds.training.len() + ds.testing.len();
            // Each side rounds up independently.
            prop_assert!(total >= size);
            prop_assert!(total <= size + 2);
        }

        #[test]
        fn prop_max_is_true_maximum(
            size in 1usize..200,
            pct in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let f = SumFunction::new(3, -2.0, 3.0);
            let mut rng = StdRng::seed_from_u64(seed);
            let ds = DatasetBuilder::build(&f, &config(size, pct), &mut rng).unwrap();

            let max = ds
                .training
                .iter()
                .chain(&ds.testing)
                .map(|s| f.evaluate(&s.point))
                .fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(ds.function_max_value, max);
        }
    }
}
