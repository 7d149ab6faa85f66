use std::fmt::Debug;

use log::{debug, trace};
use ndarray::{Array2, ArrayBase, Data, Ix1};
use num_traits::Float;

use crate::error::{ClassifierError, Result};
use crate::metrics::{accuracy_score, argmin, euclidean_distances};
use crate::ml::estimator::SupervisedEstimator;
use crate::validation::{check_array, check_is_fitted, check_x_y, unique_labels};

const ESTIMATOR_NAME: &str = "OneNearestNeighbor";

/// Configuration options for [`OneNearestNeighbor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneNearestNeighborConfig {
    /// Largest number of distinct labels `fit` accepts. A label set bigger
    /// than this almost always means a regression target was passed in.
    pub max_classes: usize,
}

impl OneNearestNeighborConfig {
    /// Create a new config with the default class limit (50).
    pub fn new() -> Self {
        Self { max_classes: 50 }
    }

    /// Customize the class limit.
    pub fn with_max_classes(mut self, max_classes: usize) -> Self {
        self.max_classes = max_classes;
        self
    }
}

impl Default for OneNearestNeighborConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Training data captured by a successful `fit`. Replaced as a whole on re-fit.
#[derive(Debug, Clone)]
struct FittedState<F, L> {
    features: Array2<F>,
    labels: Vec<L>,
    classes: Vec<L>,
}

impl<F: Float, L> FittedState<F, L> {
    fn nearest_index<S>(&self, point: &ArrayBase<S, Ix1>) -> Result<usize>
    where
        S: Data<Elem = F>,
    {
        let distances = euclidean_distances(&self.features, point)?;
        argmin(&distances)
            .ok_or_else(|| ClassifierError::invalid_input("query point contains NaN"))
    }
}

/// A one-nearest-neighbor classifier.
///
/// `fit` stores a copy of the training data. `predict` scans every stored row
/// for each query row and returns the label of the closest one under
/// Euclidean distance. Ties go to the row stored first.
///
/// # Type Parameters
/// - `F`: feature element type (`f32` or `f64`).
/// - `L`: the label type. `Ord` so the distinct classes can be kept sorted.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use one_nearest::OneNearestNeighbor;
///
/// let mut clf = OneNearestNeighbor::new();
/// clf.fit(&array![[0.0, 0.0], [10.0, 10.0]], &["a", "b"]).unwrap();
///
/// assert_eq!(clf.predict(&array![[1.0, 1.0], [9.0, 9.0]]).unwrap(), vec!["a", "b"]);
/// assert_eq!(clf.score(&array![[0.0, 0.0], [10.0, 10.0]], &["a", "b"]).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct OneNearestNeighbor<F, L> {
    config: OneNearestNeighborConfig,
    fitted: Option<FittedState<F, L>>,
}

impl<F, L> OneNearestNeighbor<F, L>
where
    F: Float,
    L: Clone + Ord + Debug,
{
    /// Constructs an unfitted classifier with the default configuration.
    pub fn new() -> Self {
        Self::with_config(OneNearestNeighborConfig::default())
    }

    pub fn with_config(config: OneNearestNeighborConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// Stores the training set.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `x` is empty, holds NaN or infinity, or has a row
    ///   count different from `y.len()`.
    /// - `InvalidInput` if `y` has more distinct labels than
    ///   `config.max_classes`.
    ///
    /// The current state is kept on error, whether unfitted or from an earlier
    /// successful fit.
    pub fn fit(&mut self, x: &Array2<F>, y: &[L]) -> Result<&mut Self> {
        check_x_y(x, y)?;

        let classes = unique_labels(y);
        if classes.len() > self.config.max_classes {
            return Err(ClassifierError::invalid_input(format!(
                "found {} distinct classes, more than the maximum of {}; \
                 are you sure this is not a regression problem?",
                classes.len(),
                self.config.max_classes
            )));
        }

        debug!(
            "fitted {} on {} samples, {} features, {} classes",
            ESTIMATOR_NAME,
            x.nrows(),
            x.ncols(),
            classes.len()
        );
        self.fitted = Some(FittedState {
            features: x.to_owned(),
            labels: y.to_vec(),
            classes,
        });
        Ok(self)
    }

    /// Index of the stored training row closest to `point`.
    ///
    /// Among rows at equal minimal distance the lowest index wins.
    ///
    /// # Errors
    ///
    /// - `NotFitted` before a successful `fit`.
    /// - `ShapeMismatch` if `point` has the wrong number of features.
    /// - `InvalidInput` if `point` contains NaN.
    pub fn nearest_neighbor_index<S>(&self, point: &ArrayBase<S, Ix1>) -> Result<usize>
    where
        S: Data<Elem = F>,
    {
        let fitted = check_is_fitted(self.fitted.as_ref(), ESTIMATOR_NAME)?;
        fitted.nearest_index(point)
    }

    /// Predicts one label per row of `x`, in row order.
    pub fn predict(&self, x: &Array2<F>) -> Result<Vec<L>> {
        let fitted = check_is_fitted(self.fitted.as_ref(), ESTIMATOR_NAME)?;
        check_array(x)?;
        if x.ncols() != fitted.features.ncols() {
            return Err(ClassifierError::shape_mismatch(
                fitted.features.ncols(),
                x.ncols(),
            ));
        }

        trace!("predicting {} rows", x.nrows());
        x.outer_iter()
            .map(|row| fitted.nearest_index(&row).map(|i| fitted.labels[i].clone()))
            .collect()
    }

    /// Mean accuracy of `predict(x)` against `y`.
    ///
    /// Fitted state is checked first, so an unfitted classifier always
    /// reports `NotFitted`.
    pub fn score(&self, x: &Array2<F>, y: &[L]) -> Result<f64> {
        check_is_fitted(self.fitted.as_ref(), ESTIMATOR_NAME)?;
        check_x_y(x, y)?;
        let y_pred = self.predict(x)?;
        accuracy_score(y, &y_pred)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    pub fn config(&self) -> &OneNearestNeighborConfig {
        &self.config
    }

    /// Sorted distinct labels seen by the last successful `fit`.
    pub fn classes(&self) -> Option<&[L]> {
        self.fitted.as_ref().map(|f| f.classes.as_slice())
    }

    pub fn training_features(&self) -> Option<&Array2<F>> {
        self.fitted.as_ref().map(|f| &f.features)
    }

    pub fn training_labels(&self) -> Option<&[L]> {
        self.fitted.as_ref().map(|f| f.labels.as_slice())
    }

    pub fn n_features_in(&self) -> Option<usize> {
        self.fitted.as_ref().map(|f| f.features.ncols())
    }
}

impl<F, L> Default for OneNearestNeighbor<F, L>
where
    F: Float,
    L: Clone + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, L> SupervisedEstimator<F, L> for OneNearestNeighbor<F, L>
where
    F: Float,
    L: Clone + Ord + Debug,
{
    fn fit(&mut self, x: &Array2<F>, y: &[L]) -> Result<&mut Self> {
        OneNearestNeighbor::fit(self, x, y)
    }

    fn predict(&self, x: &Array2<F>) -> Result<Vec<L>> {
        OneNearestNeighbor::predict(self, x)
    }

    fn score(&self, x: &Array2<F>, y: &[L]) -> Result<f64> {
        OneNearestNeighbor::score(self, x, y)
    }
}
