use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};
use num_traits::Float;

use crate::error::{ClassifierError, Result};

/// Euclidean distance from `point` to every row of `points`, in row order.
///
/// Distances come from direct coordinate differences, so a row compared with
/// itself is exactly zero. Each row is rescaled by its largest coordinate
/// difference before squaring, so large finite inputs do not overflow.
///
/// # Arguments
/// * `points` - reference set of shape `(n_samples, n_features)`
/// * `point` - a single vector of length `n_features`
///
/// # Returns
/// * `Ok(distances)` - one distance per row of `points`
/// * `Err(ClassifierError::ShapeMismatch)` - if `point.len() != points.ncols()`
///
/// # Examples
/// ```
/// use ndarray::array;
/// use one_nearest::metrics::euclidean_distances;
///
/// let points = array![[0.0, 0.0], [3.0, 4.0]];
/// let d = euclidean_distances(&points, &array![0.0, 0.0]).unwrap();
/// assert_eq!(d, array![0.0, 5.0]);
/// ```
///
/// # Complexity
/// * Time: O(n_samples * n_features)
pub fn euclidean_distances<F, S, T>(
    points: &ArrayBase<S, Ix2>,
    point: &ArrayBase<T, Ix1>,
) -> Result<Array1<F>>
where
    F: Float,
    S: Data<Elem = F>,
    T: Data<Elem = F>,
{
    if point.len() != points.ncols() {
        return Err(ClassifierError::shape_mismatch(points.ncols(), point.len()));
    }

    Ok(points
        .outer_iter()
        .map(|row| scaled_distance(row, point.view()))
        .collect())
}

/// L2 norm of `a - b` computed as `2 * scale * sqrt(sum(((a/2 - b/2) / scale)^2))`.
///
/// Halving keeps `a - b` finite for any finite pair. NaN propagates.
fn scaled_distance<F: Float>(a: ArrayView1<F>, b: ArrayView1<F>) -> F {
    let two = F::one() + F::one();
    let half_diff = |(&x, &y): (&F, &F)| x / two - y / two;

    let scale = a.iter().zip(b.iter()).map(half_diff).fold(F::zero(), |max, d| {
        let d = d.abs();
        if d.is_nan() || d > max {
            d
        } else {
            max
        }
    });
    if scale.is_zero() {
        return F::zero();
    }

    let sum = a
        .iter()
        .zip(b.iter())
        .map(half_diff)
        .fold(F::zero(), |acc, d| {
            let r = d / scale;
            acc + r * r
        });
    two * scale * sum.sqrt()
}

/// Index of the smallest value, ties going to the lowest index.
///
/// NaN entries are skipped. Returns `None` when there is no comparable value.
pub fn argmin<F, S>(values: &ArrayBase<S, Ix1>) -> Option<usize>
where
    F: Float,
    S: Data<Elem = F>,
{
    let mut best: Option<(usize, F)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if v >= current => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Fraction of positions where `y_pred` equals `y_true`.
///
/// # Errors
/// * `InvalidInput` - if the sequences are empty or differ in length
pub fn accuracy_score<L: PartialEq>(y_true: &[L], y_pred: &[L]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::invalid_input(format!(
            "y_true has {} labels but y_pred has {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(ClassifierError::invalid_input(
            "cannot compute accuracy of an empty prediction",
        ));
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}
