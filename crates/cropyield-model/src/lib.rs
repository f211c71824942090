//! Crop Yield Model - the prediction contract around an opaque regression model
//!
//! The model is a black box behind [`YieldModel`]: a batch of
//! [`FeatureRecord`]s goes in, one raw real per record comes out. The
//! [`Predictor`] wraps any model and enforces the contract every caller relies
//! on: same length, same order, every estimate clamped to `>= 0`.
//!
//! Two read-only resources are loaded once per process:
//!
//! - a pipeline artifact ([`PolynomialPipeline`]), the concrete model
//! - a reference dataset ([`ReferenceDataset`]), used only to derive the
//!   form's option lists and default values
//!
//! [`FeatureRecord`]: cropyield_types::FeatureRecord

#![deny(unsafe_code)]

pub mod contract;
pub mod dataset;
pub mod error;
pub mod pipeline;

pub use contract::{Predictor, YieldModel};
pub use dataset::ReferenceDataset;
pub use error::{LoadError, LoadResult, ModelError, ModelResult};
pub use pipeline::{
    CategoryVocabulary, NumericTransform, PipelineArtifact, PolynomialPipeline, StandardScaler,
    ARTIFACT_FORMAT_VERSION,
};
