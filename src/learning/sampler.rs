//! Random sampling of the objective function's domain.

use super::types::{DomainBound, SamplePoint};
use rand::Rng;

/// Draws sample points from a scalar bound range.
///
/// Each coordinate is computed as
///
/// ```text
/// value = upper * u1 - 2 * lower * u2
/// ```
///
/// with `u1` and `u2` two separate uniform draws in `[0, 1)`, taken in that
/// order. This is *not* a uniform draw over `[lower, upper]`: for a negative
/// `lower` the reachable range is `[0, upper - 2 * lower)`, skewed to the right.
/// Results from earlier experiments depend on this exact formula.
pub struct RandomSampler;

impl RandomSampler {
    /// Samples one point of the given dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use u_funclearn::learning::{DomainBound, RandomSampler};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let point = RandomSampler::sample(3, DomainBound::new(0.0, 1.0), &mut rng);
    /// assert_eq!(point.len(), 3);
    /// assert!(point.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn sample<R: Rng + ?Sized>(dimension: usize, bound: DomainBound, rng: &mut R) -> SamplePoint {
        (0..dimension)
            .map(|_| Self::coordinate(bound, rng))
            .collect()
    }

    fn coordinate<R: Rng + ?Sized>(bound: DomainBound, rng: &mut R) -> f64 {
        let u1: f64 = rng.random();
        let u2: f64 = rng.random();
        bound.upper * u1 - 2.0 * bound.lower * u2
    }
}
