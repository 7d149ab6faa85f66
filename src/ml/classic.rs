pub mod one_nearest;

// Re-export public types
pub use one_nearest::{OneNearestNeighbor, OneNearestNeighborConfig};
