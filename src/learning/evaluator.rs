//! Candidate weight evaluation.
//!
//! Two evaluators share one accumulation pattern:
//!
//! - [`ScaledFitnessEvaluator`] scores against the training set with targets
//!   divided by the function's maximum, so they live in the approximator's
//!   output range. This is what the optimizer sees.
//! - [`GeneralizationScorer`] scores against the testing set in the
//!   function's native units. It is a diagnostic only.
//!
//! Both return the *negated* mean squared error: values closer to zero are
//! better.

use super::dataset::Sample;
use super::types::FunctionApproximator;
use crate::error::{LearningError, Result};

/// Training fitness over scaled targets.
pub struct ScaledFitnessEvaluator<'a, A: ?Sized> {
    approximator: &'a A,
    training: &'a [Sample],
    function_max_value: f64,
}

impl<'a, A: FunctionApproximator + ?Sized> ScaledFitnessEvaluator<'a, A> {
    pub fn new(approximator: &'a A, training: &'a [Sample], function_max_value: f64) -> Self {
        Self {
            approximator,
            training,
            function_max_value,
        }
    }

    /// Returns `-mean((target / max - output)^2)` over the training set.
    ///
    /// # Errors
    ///
    /// - [`LearningError::ShapeMismatch`] if `weights` has the wrong length.
    /// - [`LearningError::DegenerateState`] if the training set is empty or
    ///   the function maximum is zero or not finite.
    pub fn evaluate(&self, weights: &[f64]) -> Result<f64> {
        check_shape(self.approximator, weights)?;
        if self.training.is_empty() {
            return Err(LearningError::DegenerateState(
                "training set is empty".into(),
            ));
        }
        if self.function_max_value == 0.0 {
            return Err(LearningError::DegenerateState(
                "function maximum is zero; targets cannot be scaled".into(),
            ));
        }
        if !self.function_max_value.is_finite() {
            return Err(LearningError::DegenerateState(format!(
                "function maximum is not finite: {}",
                self.function_max_value
            )));
        }

        mean_negative_squared_error(
            self.approximator,
            self.training,
            weights,
            self.function_max_value,
        )
    }
}

/// Held-out error in the function's native units.
pub struct GeneralizationScorer<'a, A: ?Sized> {
    approximator: &'a A,
    testing: &'a [Sample],
}

impl<'a, A: FunctionApproximator + ?Sized> GeneralizationScorer<'a, A> {
    pub fn new(approximator: &'a A, testing: &'a [Sample]) -> Self {
        Self {
            approximator,
            testing,
        }
    }

    /// Returns `-mean((target - output)^2)` over the testing set.
    ///
    /// # Errors
    ///
    /// - [`LearningError::ShapeMismatch`] if `weights` has the wrong length.
    /// - [`LearningError::DegenerateState`] if the testing set is empty.
    pub fn score(&self, weights: &[f64]) -> Result<f64> {
        check_shape(self.approximator, weights)?;
        if self.testing.is_empty() {
            return Err(LearningError::DegenerateState(
                "testing set is empty".into(),
            ));
        }

        mean_negative_squared_error(self.approximator, self.testing, weights, 1.0)
    }
}

fn check_shape<A: FunctionApproximator + ?Sized>(approximator: &A, weights: &[f64]) -> Result<()> {
    let expected = approximator.weight_count();
    if weights.len() != expected {
        return Err(LearningError::ShapeMismatch {
            expected,
            actual: weights.len(),
        });
    }
    Ok(())
}

fn mean_negative_squared_error<A: FunctionApproximator + ?Sized>(
    approximator: &A,
    samples: &[Sample],
    weights: &[f64],
    scale: f64,
) -> Result<f64> {
    let mut total = 0.0;
    for sample in samples {
        let expected = sample.target / scale;
        let output = approximator
            .evaluate(&sample.point, weights)
            .first()
            .copied()
            .ok_or_else(|| {
                LearningError::DegenerateState("approximator produced no output".into())
            })?;
        total -= (expected - output).powi(2);
    }
    Ok(total / samples.len() as f64)
}
