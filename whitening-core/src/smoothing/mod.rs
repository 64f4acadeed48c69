//! Sliding-window smoothing

pub mod sliding_mean;

pub use sliding_mean::{sliding_mean, BoundaryPolicy, SmootherOptions};
