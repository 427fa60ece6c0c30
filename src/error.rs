//! Error types for function learning problems.

use thiserror::Error;

/// Errors raised while assembling or evaluating a function learning problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LearningError {
    /// The problem was assembled from an invalid configuration.
    ///
    /// Raised once, before any sampling takes place.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A candidate weight vector does not match the approximator's weight count.
    #[error("Shape mismatch: expected {expected} weights, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Evaluation over the sampled data would divide by zero.
    #[error("Degenerate state: {0}")]
    DegenerateState(String),

    /// A probability distribution was sampled with unusable parameters.
    #[error("Invalid distribution parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LearningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LearningError::ShapeMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(err.to_string(), "Shape mismatch: expected 10 weights, got 9");

        let err = LearningError::Configuration("output size must be 1".into());
        assert_eq!(err.to_string(), "Configuration error: output size must be 1");

        let err = LearningError::DegenerateState("training set is empty".into());
        assert!(err.to_string().starts_with("Degenerate state"));
    }
}
