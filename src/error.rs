use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors raised by the estimators and their validation helpers.
///
/// Every error is returned to the immediate caller. Nothing is retried and a
/// failed call never leaves an estimator partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// Malformed arrays, mismatched lengths or an unusable label set.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The estimator was used before a successful `fit`.
    #[error(
        "this {0} instance is not fitted yet; call `fit` with appropriate arguments before using this estimator"
    )]
    NotFitted(String),

    /// Feature dimensionality differs from what the estimator was fitted on.
    #[error("expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl ClassifierError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ClassifierError::InvalidInput(msg.into())
    }

    pub fn not_fitted(estimator: impl Into<String>) -> Self {
        ClassifierError::NotFitted(estimator.into())
    }

    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        ClassifierError::ShapeMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            ClassifierError::invalid_input("bad"),
            ClassifierError::InvalidInput("bad".to_string())
        );
        assert_eq!(
            ClassifierError::shape_mismatch(2, 3),
            ClassifierError::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ClassifierError::shape_mismatch(2, 3).to_string(),
            "expected 2 features, got 3"
        );
        assert!(ClassifierError::not_fitted("OneNearestNeighbor")
            .to_string()
            .starts_with("this OneNearestNeighbor instance is not fitted yet"));
    }
}
