//! Crop Yield Types - the data contract between the form, the model and the charts
//!
//! Every layer of the predictor exchanges the types defined here:
//!
//! - **FeatureRecord**: one fully-populated model input (crop, region, rainfall,
//!   pesticides, temperature)
//! - **NumericFeature**: the name of a field that a sensitivity sweep may vary
//! - **YieldEstimate**: a clamped, non-negative prediction
//! - **SweepResult**: ordered (input, estimate) pairs for one varied feature
//! - **InputForm / FormOptions**: what the interactive surface submits and the
//!   choices it is allowed to offer

#![deny(unsafe_code)]

pub mod estimate;
pub mod form;
pub mod record;
pub mod sweep;

pub use estimate::{YieldEstimate, YIELD_UNIT};
pub use form::{
    FormDefaults, FormError, FormOptions, InputForm, RAINFALL_MAX, TEMPERATURE_MAX,
    TEMPERATURE_MIN,
};
pub use record::{FeatureRecord, NumericFeature};
pub use sweep::{SweepPoint, SweepResult};
