//! Collaborator traits and shared value types.
//!
//! The objective function and the function approximator are supplied by the
//! caller. This module only fixes the contract between them and the sampling
//! and evaluation machinery.

use crate::error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the objective function's input domain.
pub type SamplePoint = Vec<f64>;

/// Closed scalar range `[lower, upper]` of one domain component.
///
/// # Known limitation
///
/// Dataset construction reads only the objective function's *first* domain
/// component and applies it to every coordinate, even when the function
/// declares different bounds per dimension. Changing this would alter the
/// sampled distribution and break reproducibility with earlier runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainBound {
    /// Lower end of the range.
    pub lower: f64,

    /// Upper end of the range.
    pub upper: f64,
}

impl DomainBound {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Checks that both ends are finite and ordered.
    pub fn validate(&self) -> Result<(), String> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(format!(
                "domain bound must be finite, got [{}, {}]",
                self.lower, self.upper
            ));
        }
        if self.lower > self.upper {
            return Err(format!(
                "domain lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            ));
        }
        Ok(())
    }
}

/// A continuous function to be learned.
///
/// `evaluate` must be deterministic: each sample's target is computed once,
/// while the dataset is built, and reused by every later fitness call.
///
/// # Examples
///
/// ```
/// use u_funclearn::learning::{DomainBound, ObjectiveFunction};
///
/// struct Sphere { bounds: Vec<DomainBound> }
///
/// impl ObjectiveFunction for Sphere {
///     fn dimension(&self) -> usize { self.bounds.len() }
///     fn bounds(&self) -> &[DomainBound] { &self.bounds }
///     fn evaluate(&self, point: &[f64]) -> f64 {
///         point.iter().map(|x| x * x).sum()
///     }
/// }
///
/// let f = Sphere { bounds: vec![DomainBound::new(-5.0, 5.0); 2] };
/// assert_eq!(f.evaluate(&[1.0, 2.0]), 5.0);
/// ```
pub trait ObjectiveFunction: Send + Sync {
    /// Number of input coordinates.
    fn dimension(&self) -> usize;

    /// Per-component domain bounds. At least one component is required.
    fn bounds(&self) -> &[DomainBound];

    /// Evaluates the function at `point` (length [`dimension`](Self::dimension)).
    fn evaluate(&self, point: &[f64]) -> f64;
}

/// A parameterized model whose weights are searched by an outer optimizer.
///
/// Typically a feed-forward neural network. The network takes the function's
/// inputs plus one bias input, so [`input_size`](Self::input_size) is expected
/// to be `dimension + 1`. The bias is the approximator's own concern: it is
/// handed the raw sample point.
pub trait FunctionApproximator: Send + Sync {
    /// Input layer size, bias included.
    fn input_size(&self) -> usize;

    /// Output layer size. Must be 1 for function learning.
    fn output_size(&self) -> usize;

    /// Number of weights a candidate must supply.
    fn weight_count(&self) -> usize;

    /// Computes the network output for `input` using `weights`.
    fn evaluate(&self, input: &[f64], weights: &[f64]) -> Vec<f64>;
}

/// A problem an outer optimizer can search over.
///
/// Candidates are real vectors, one value per entry of
/// [`solution_domain`](Self::solution_domain). Fitness follows the
/// negated-error convention: values closer to zero are better.
pub trait OptimizationProblem: Send + Sync {
    /// Search range of each candidate component.
    fn solution_domain(&self) -> Vec<DomainBound>;

    /// Scores one candidate.
    fn fitness(&self, candidate: &[f64]) -> error::Result<f64>;
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for Box<T> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn bounds(&self) -> &[DomainBound] {
        (**self).bounds()
    }

    fn evaluate(&self, point: &[f64]) -> f64 {
        (**self).evaluate(point)
    }
}

impl<T: FunctionApproximator + ?Sized> FunctionApproximator for Box<T> {
    fn input_size(&self) -> usize {
        (**self).input_size()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn weight_count(&self) -> usize {
        (**self).weight_count()
    }

    fn evaluate(&self, input: &[f64], weights: &[f64]) -> Vec<f64> {
        (**self).evaluate(input, weights)
    }
}
