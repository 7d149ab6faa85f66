pub mod classic;
pub mod estimator;

pub use classic::*;
pub use estimator::SupervisedEstimator;
