use ndarray::Array2;
use num_traits::Float;

use crate::error::Result;
use crate::metrics::accuracy_score;
use crate::validation::check_x_y;

/// The fit/predict/score contract shared by supervised classifiers.
///
/// Implementors supply `fit` and `predict`; `score` is derived from them as
/// plain accuracy.
pub trait SupervisedEstimator<F: Float, L: PartialEq> {
    /// Learns from `x` (one row per sample) and the matching labels `y`.
    /// Returns the estimator so calls can be chained.
    fn fit(&mut self, x: &Array2<F>, y: &[L]) -> Result<&mut Self>;

    /// One predicted label per row of `x`, in row order.
    fn predict(&self, x: &Array2<F>) -> Result<Vec<L>>;

    /// Fraction of rows of `x` whose prediction equals the label in `y`.
    fn score(&self, x: &Array2<F>, y: &[L]) -> Result<f64> {
        check_x_y(x, y)?;
        let y_pred = self.predict(x)?;
        accuracy_score(y, &y_pred)
    }
}
