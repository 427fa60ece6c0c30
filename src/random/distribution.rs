//! Concrete probability distributions.

use crate::error::{LearningError, Result};
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use rand_distr::{Cauchy, Normal, StandardNormal};

/// A source of random numbers following some distribution.
///
/// `sample` draws from the distribution's standard form. `sample_with` takes
/// two control parameters whose meaning depends on the variant (bounds for
/// [`UniformDistribution`], mean and deviation for [`GaussianDistribution`],
/// location and scale for [`CauchyDistribution`]).
pub trait ProbabilityDistribution {
    /// The underlying uniform generator.
    type Source: Rng;

    /// Samples from the standard form of the distribution.
    fn sample(&mut self) -> f64;

    /// Samples with two distribution-specific parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::InvalidParameter`] if the parameters do not
    /// describe a valid distribution.
    fn sample_with(&mut self, p1: f64, p2: f64) -> Result<f64>;

    /// Gives access to the underlying uniform generator.
    fn source(&mut self) -> &mut Self::Source;
}

/// Uniform distribution. Standard form is `[0, 1)`.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_funclearn::random::{ProbabilityDistribution, UniformDistribution};
///
/// let mut dist = UniformDistribution::new(StdRng::seed_from_u64(42));
/// let x = dist.sample_with(-1.0, 1.0).unwrap();
/// assert!((-1.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct UniformDistribution<R> {
    rng: R,
}

impl<R: Rng> UniformDistribution<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProbabilityDistribution for UniformDistribution<R> {
    type Source = R;

    fn sample(&mut self) -> f64 {
        self.rng.random()
    }

    /// `p1` is the inclusive lower bound, `p2` the exclusive upper bound.
    fn sample_with(&mut self, p1: f64, p2: f64) -> Result<f64> {
        let uniform = Uniform::new(p1, p2).map_err(|e| {
            LearningError::InvalidParameter(format!("uniform range [{p1}, {p2}): {e}"))
        })?;
        Ok(uniform.sample(&mut self.rng))
    }

    fn source(&mut self) -> &mut R {
        &mut self.rng
    }
}

/// Gaussian distribution. Standard form is `N(0, 1)`.
#[derive(Debug, Clone)]
pub struct GaussianDistribution<R> {
    rng: R,
}

impl<R: Rng> GaussianDistribution<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProbabilityDistribution for GaussianDistribution<R> {
    type Source = R;

    fn sample(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// `p1` is the mean, `p2` the standard deviation.
    fn sample_with(&mut self, p1: f64, p2: f64) -> Result<f64> {
        if !(p2 >= 0.0 && p2.is_finite()) {
            return Err(LearningError::InvalidParameter(format!(
                "gaussian deviation must be finite and non-negative, got {p2}"
            )));
        }
        let normal = Normal::new(p1, p2).map_err(|e| {
            LearningError::InvalidParameter(format!("gaussian mean {p1}, deviation {p2}: {e}"))
        })?;
        Ok(normal.sample(&mut self.rng))
    }

    fn source(&mut self) -> &mut R {
        &mut self.rng
    }
}

/// Cauchy distribution. Standard form has location 0 and scale 1.
#[derive(Debug, Clone)]
pub struct CauchyDistribution<R> {
    rng: R,
}

impl<R: Rng> CauchyDistribution<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProbabilityDistribution for CauchyDistribution<R> {
    type Source = R;

    /// Ratio of two independent standard normals.
    fn sample(&mut self) -> f64 {
        let numerator: f64 = self.rng.sample(StandardNormal);
        let denominator: f64 = self.rng.sample(StandardNormal);
        numerator / denominator
    }

    /// `p1` is the location, `p2` the scale.
    fn sample_with(&mut self, p1: f64, p2: f64) -> Result<f64> {
        if !(p2 > 0.0 && p2.is_finite()) {
            return Err(LearningError::InvalidParameter(format!(
                "cauchy scale must be finite and positive, got {p2}"
            )));
        }
        let cauchy = Cauchy::new(p1, p2).map_err(|e| {
            LearningError::InvalidParameter(format!("cauchy location {p1}, scale {p2}: {e}"))
        })?;
        Ok(cauchy.sample(&mut self.rng))
    }

    fn source(&mut self) -> &mut R {
        &mut self.rng
    }
}
