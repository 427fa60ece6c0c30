//! Function learning problems.
//!
//! Recasts a continuous function as a supervised-learning problem for a
//! neural network whose weights are searched by an outer optimizer
//! (GA, BRKGA, PSO, ...). The domain is sampled once into disjoint training
//! and testing sets; candidate weight vectors are then scored against them.
//!
//! # Core Traits
//!
//! - [`ObjectiveFunction`]: the function to learn (dimension, bounds, evaluate)
//! - [`FunctionApproximator`]: the network (layer sizes, weight count, evaluate)
//! - [`OptimizationProblem`]: what an optimizer sees (domain, fitness)
//!
//! # Key Types
//!
//! - [`LearningConfig`]: sample set size, training percentage, seed
//! - [`FunctionLearningProblem`]: the assembled problem
//! - [`DatasetBuilder`] / [`Dataset`]: the fixed train/test split
//! - [`ScaledFitnessEvaluator`] / [`GeneralizationScorer`]: the two error measures
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_funclearn::learning::{
//!     DomainBound, FunctionApproximator, FunctionLearningProblem, LearningConfig,
//!     ObjectiveFunction,
//! };
//!
//! struct Line { bounds: [DomainBound; 1] }
//!
//! impl ObjectiveFunction for Line {
//!     fn dimension(&self) -> usize { 1 }
//!     fn bounds(&self) -> &[DomainBound] { &self.bounds }
//!     fn evaluate(&self, p: &[f64]) -> f64 { 2.0 * p[0] + 1.0 }
//! }
//!
//! // Linear unit with a bias weight.
//! struct Perceptron;
//!
//! impl FunctionApproximator for Perceptron {
//!     fn input_size(&self) -> usize { 2 }
//!     fn output_size(&self) -> usize { 1 }
//!     fn weight_count(&self) -> usize { 2 }
//!     fn evaluate(&self, x: &[f64], w: &[f64]) -> Vec<f64> { vec![w[0] + w[1] * x[0]] }
//! }
//!
//! let problem = FunctionLearningProblem::new(
//!     Line { bounds: [DomainBound::new(0.0, 1.0)] },
//!     Perceptron,
//!     LearningConfig::default().with_sample_set_size(100),
//!     &mut StdRng::seed_from_u64(42),
//! )
//! .unwrap();
//!
//! let fitness = problem.evaluate_fitness(&[0.1, 0.5]).unwrap();
//! assert!(fitness <= 0.0);
//! let error = problem.generalization_error(&[1.0, 2.0]).unwrap();
//! assert!(error.abs() < 1e-20);
//! ```

mod config;
mod dataset;
mod evaluator;
mod problem;
mod sampler;
mod types;

pub use config::LearningConfig;
pub use dataset::{Dataset, DatasetBuilder, Sample};
pub use evaluator::{GeneralizationScorer, ScaledFitnessEvaluator};
pub use problem::{FunctionLearningProblem, FunctionLearningProblemBuilder};
pub use sampler::RandomSampler;
pub use types::{
    DomainBound, FunctionApproximator, ObjectiveFunction, OptimizationProblem, SamplePoint,
};
