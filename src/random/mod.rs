//! Probability distributions over an injected uniform source.
//!
//! Sampling routines in this crate take any [`rand::Rng`] as their uniform
//! `[0, 1)` source. The [`ProbabilityDistribution`] trait wraps such a source
//! in a swappable distribution, constructed by the caller and handed to code
//! that only needs "a random number" (e.g. initial weight vectors).

mod distribution;

pub use distribution::{
    CauchyDistribution, GaussianDistribution, ProbabilityDistribution, UniformDistribution,
};
