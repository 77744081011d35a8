//! # Synical Core
//!
//! Core types and I/O for the synical wallpaper generator.
//!
//! This crate provides:
//! - `FeatureMatrix`: normalized audio-feature grid (rows = feature channels,
//!   columns = time frames)
//! - `FeatureSampler`: interpolated read access by continuous position
//! - Algorithm trait for consistent API
//! - Text I/O for feature-matrix files

pub mod error;
pub mod features;
pub mod io;

pub use error::{Error, Result};
pub use features::{FeatureMatrix, FeatureSampler, MatrixStatistics};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::features::{FeatureMatrix, FeatureSampler, MatrixStatistics};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in synical.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
