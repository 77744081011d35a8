//! Feature-matrix types and sampling

mod matrix;
mod sampler;

pub use matrix::{FeatureMatrix, MatrixStatistics, DEFAULT_CEILING};
pub use sampler::FeatureSampler;
