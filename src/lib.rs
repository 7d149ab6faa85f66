pub mod error;
pub mod metrics;
pub mod ml;
pub mod validation;

pub use error::{ClassifierError, Result};
pub use ml::{OneNearestNeighbor, OneNearestNeighborConfig, SupervisedEstimator};
