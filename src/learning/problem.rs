//! Function learning problem assembly and the optimizer-facing API.

use super::config::LearningConfig;
use super::dataset::{Dataset, DatasetBuilder, Sample};
use super::evaluator::{GeneralizationScorer, ScaledFitnessEvaluator};
use super::types::{DomainBound, FunctionApproximator, ObjectiveFunction, OptimizationProblem};
use crate::error::{LearningError, Result};
use crate::random::ProbabilityDistribution;
use rand::Rng;
use tracing::debug;
use u_numflow::random::create_rng;

/// Search range of every network weight.
const WEIGHT_BOUND: DomainBound = DomainBound {
    lower: -1.0,
    upper: 1.0,
};

/// Builder for [`FunctionLearningProblem`].
///
/// Every precondition is checked before the dataset is sampled, so an
/// invalid setup never produces a partially built problem.
///
/// # Examples
///
/// ```
/// use u_funclearn::learning::{
///     DomainBound, FunctionApproximator, FunctionLearningProblemBuilder, LearningConfig,
///     ObjectiveFunction,
/// };
///
/// struct Sphere { bounds: [DomainBound; 1] }
///
/// impl ObjectiveFunction for Sphere {
///     fn dimension(&self) -> usize { 2 }
///     fn bounds(&self) -> &[DomainBound] { &self.bounds }
///     fn evaluate(&self, p: &[f64]) -> f64 { p.iter().map(|x| x * x).sum() }
/// }
///
/// struct Linear;
///
/// impl FunctionApproximator for Linear {
///     fn input_size(&self) -> usize { 3 }
///     fn output_size(&self) -> usize { 1 }
///     fn weight_count(&self) -> usize { 3 }
///     fn evaluate(&self, x: &[f64], w: &[f64]) -> Vec<f64> {
///         vec![w[0] + w[1] * x[0] + w[2] * x[1]]
///     }
/// }
///
/// let problem = FunctionLearningProblemBuilder::new()
///     .with_function(Sphere { bounds: [DomainBound::new(-1.0, 1.0)] })
///     .with_approximator(Linear)
///     .with_config(LearningConfig::default().with_sample_set_size(50).with_seed(42))
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.weight_domain().len(), 3);
/// assert!(problem.evaluate_fitness(&[0.0, 0.5, 0.5]).unwrap() <= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FunctionLearningProblemBuilder<F, A> {
    function: Option<F>,
    approximator: Option<A>,
    config: LearningConfig,
}

impl<F, A> Default for FunctionLearningProblemBuilder<F, A> {
    fn default() -> Self {
        Self {
            function: None,
            approximator: None,
            config: LearningConfig::default(),
        }
    }
}

impl<F: ObjectiveFunction, A: FunctionApproximator> FunctionLearningProblemBuilder<F, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the function to learn.
    pub fn with_function(mut self, function: F) -> Self {
        self.function = Some(function);
        self
    }

    /// Sets the approximator whose weights are scored.
    pub fn with_approximator(mut self, approximator: A) -> Self {
        self.approximator = Some(approximator);
        self
    }

    /// Replaces the sampling configuration.
    pub fn with_config(mut self, config: LearningConfig) -> Self {
        self.config = config;
        self
    }

    /// Checks the assembly without sampling anything.
    ///
    /// The approximator must take the function's inputs plus one bias input
    /// and produce a single output.
    pub fn validate(&self) -> Result<()> {
        let function = self
            .function
            .as_ref()
            .ok_or_else(|| LearningError::Configuration("objective function is missing".into()))?;
        self.config
            .validate()
            .map_err(LearningError::Configuration)?;
        let approximator = self
            .approximator
            .as_ref()
            .ok_or_else(|| LearningError::Configuration("approximator is missing".into()))?;

        if approximator.input_size() != function.dimension() + 1 {
            return Err(LearningError::Configuration(format!(
                "approximator input size {} does not match function dimension {} plus bias",
                approximator.input_size(),
                function.dimension()
            )));
        }
        if approximator.output_size() != 1 {
            return Err(LearningError::Configuration(format!(
                "approximator output size must be 1, got {}",
                approximator.output_size()
            )));
        }
        Ok(())
    }

    /// Builds the problem, seeding the sampler from the configuration.
    ///
    /// `seed = None` draws a random seed.
    pub fn build(self) -> Result<FunctionLearningProblem<F, A>> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        self.build_with_rng(&mut rng)
    }

    /// Builds the problem, sampling the dataset from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<FunctionLearningProblem<F, A>> {
        self.validate()?;
        let (Some(function), Some(approximator)) = (self.function, self.approximator) else {
            return Err(LearningError::Configuration(
                "objective function and approximator are required".into(),
            ));
        };

        let dataset = DatasetBuilder::build(&function, &self.config, rng)?;

        Ok(FunctionLearningProblem {
            function,
            approximator,
            config: self.config,
            dataset,
        })
    }
}

/// A continuous function recast as a supervised-learning problem.
///
/// Holds a fixed train/test split of the function's domain. Candidate weight
/// vectors for the approximator are scored by
/// [`evaluate_fitness`](Self::evaluate_fitness) (scaled training error, used
/// by the optimizer) and [`generalization_error`](Self::generalization_error)
/// (raw testing error, diagnostic). Both are read-only and may be called
/// concurrently.
#[derive(Debug, Clone)]
pub struct FunctionLearningProblem<F, A> {
    function: F,
    approximator: A,
    config: LearningConfig,
    dataset: Dataset,
}

impl<F: ObjectiveFunction, A: FunctionApproximator> FunctionLearningProblem<F, A> {
    /// Assembles a problem and samples its dataset from `rng`.
    ///
    /// Shorthand for the [`FunctionLearningProblemBuilder`] chain.
    pub fn new<R: Rng + ?Sized>(
        function: F,
        approximator: A,
        config: LearningConfig,
        rng: &mut R,
    ) -> Result<Self> {
        FunctionLearningProblemBuilder::new()
            .with_function(function)
            .with_approximator(approximator)
            .with_config(config)
            .build_with_rng(rng)
    }

    /// Returns an empty builder.
    pub fn builder() -> FunctionLearningProblemBuilder<F, A> {
        FunctionLearningProblemBuilder::new()
    }

    /// Scaled training fitness of `weights`. Closer to zero is better.
    ///
    /// # Errors
    ///
    /// - [`LearningError::ShapeMismatch`] if `weights.len()` differs from the
    ///   approximator's weight count.
    /// - [`LearningError::DegenerateState`] if the training set is empty or
    ///   the observed function maximum is zero.
    pub fn evaluate_fitness(&self, weights: &[f64]) -> Result<f64> {
        ScaledFitnessEvaluator::new(
            &self.approximator,
            &self.dataset.training,
            self.dataset.function_max_value,
        )
        .evaluate(weights)
    }

    /// Unscaled testing error of `weights`. Closer to zero is better.
    ///
    /// # Errors
    ///
    /// Same shape check as [`evaluate_fitness`](Self::evaluate_fitness);
    /// [`LearningError::DegenerateState`] if the testing set is empty.
    pub fn generalization_error(&self, weights: &[f64]) -> Result<f64> {
        GeneralizationScorer::new(&self.approximator, &self.dataset.testing).score(weights)
    }

    /// Scores a batch of candidates, in input order.
    ///
    /// Runs on the rayon pool when built with the `parallel` feature and
    /// [`LearningConfig::parallel`] is set.
    pub fn evaluate_population(&self, candidates: &[Vec<f64>]) -> Vec<Result<f64>> {
        debug!(candidates = candidates.len(), "evaluating population");

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;
            return candidates
                .par_iter()
                .map(|w| self.evaluate_fitness(w))
                .collect();
        }

        candidates
            .iter()
            .map(|w| self.evaluate_fitness(w))
            .collect()
    }

    /// Search range of each weight, `[-1, 1]` for every one of them.
    pub fn weight_domain(&self) -> Vec<DomainBound> {
        vec![WEIGHT_BOUND; self.approximator.weight_count()]
    }

    /// Draws one candidate weight vector from `distribution`'s standard form.
    pub fn random_weights<D: ProbabilityDistribution>(&self, distribution: &mut D) -> Vec<f64> {
        (0..self.approximator.weight_count())
            .map(|_| distribution.sample())
            .collect()
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn approximator(&self) -> &A {
        &self.approximator
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    pub fn sample_set_size(&self) -> usize {
        self.config.sample_set_size
    }

    pub fn training_percentage(&self) -> f64 {
        self.config.training_percentage
    }

    pub fn testing_percentage(&self) -> f64 {
        self.config.testing_percentage()
    }

    pub fn training_set(&self) -> &[Sample] {
        &self.dataset.training
    }

    pub fn testing_set(&self) -> &[Sample] {
        &self.dataset.testing
    }

    /// Largest raw function value seen while sampling.
    pub fn function_max_value(&self) -> f64 {
        self.dataset.function_max_value
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Consumes the problem, keeping only its sampled data.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

impl<F: ObjectiveFunction, A: FunctionApproximator> OptimizationProblem
    for FunctionLearningProblem<F, A>
{
    fn solution_domain(&self) -> Vec<DomainBound> {
        self.weight_domain()
    }

    fn fitness(&self, candidate: &[f64]) -> Result<f64> {
        self.evaluate_fitness(candidate)
    }
}
