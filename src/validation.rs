//! Boundary checks shared by the estimators.
//!
//! Estimators call these before touching their own state, so a rejected
//! input never mutates anything.

use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

use crate::error::{ClassifierError, Result};

/// Builds a feature matrix from row vectors.
///
/// # Errors
/// * `InvalidInput` - if `rows` is empty or the rows have different lengths
///
/// # Examples
/// ```
/// use one_nearest::validation::rows_to_matrix;
///
/// let x = rows_to_matrix(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
/// assert_eq!(x.dim(), (2, 2));
/// assert!(rows_to_matrix(&[vec![0.0, 1.0], vec![2.0]]).is_err());
/// ```
pub fn rows_to_matrix<F: Float>(rows: &[Vec<F>]) -> Result<Array2<F>> {
    let n_features = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| ClassifierError::invalid_input("expected at least 1 sample, got 0"))?;

    let mut flat = Vec::with_capacity(rows.len() * n_features);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_features {
            return Err(ClassifierError::invalid_input(format!(
                "row {} has {} features, expected {}",
                i,
                row.len(),
                n_features
            )));
        }
        flat.extend_from_slice(row);
    }

    Array2::from_shape_vec((rows.len(), n_features), flat)
        .map_err(|e| ClassifierError::invalid_input(e.to_string()))
}

/// Checks that `x` has at least one sample, at least one feature and only
/// finite values.
pub fn check_array<F, S>(x: &ArrayBase<S, Ix2>) -> Result<()>
where
    F: Float,
    S: Data<Elem = F>,
{
    let (n_samples, n_features) = x.dim();
    if n_samples == 0 {
        return Err(ClassifierError::invalid_input(
            "expected at least 1 sample, got 0",
        ));
    }
    if n_features == 0 {
        return Err(ClassifierError::invalid_input(
            "expected at least 1 feature, got 0",
        ));
    }
    if let Some(((row, col), _)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ClassifierError::invalid_input(format!(
            "input contains NaN or infinity at ({}, {})",
            row, col
        )));
    }
    Ok(())
}

/// Checks that there is exactly one label per sample.
pub fn check_consistent_length(n_samples: usize, n_labels: usize) -> Result<()> {
    if n_samples != n_labels {
        return Err(ClassifierError::invalid_input(format!(
            "found input variables with inconsistent numbers of samples: [{}, {}]",
            n_samples, n_labels
        )));
    }
    Ok(())
}

/// Joint check of a feature matrix and its labels.
pub fn check_x_y<F, S, L>(x: &ArrayBase<S, Ix2>, y: &[L]) -> Result<()>
where
    F: Float,
    S: Data<Elem = F>,
{
    check_array(x)?;
    check_consistent_length(x.nrows(), y.len())
}

/// Returns the fitted state or a `NotFitted` error naming `estimator`.
pub fn check_is_fitted<'a, T>(state: Option<&'a T>, estimator: &str) -> Result<&'a T> {
    state.ok_or_else(|| ClassifierError::not_fitted(estimator))
}

/// Sorted distinct values of `y`.
pub fn unique_labels<L: Clone + Ord>(y: &[L]) -> Vec<L> {
    let mut classes = y.to_vec();
    classes.sort();
    classes.dedup();
    classes
}
