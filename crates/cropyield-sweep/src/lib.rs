//! Crop Yield Sweep - one-dimensional sensitivity sweeps around a prediction
//!
//! A sweep varies exactly one numeric feature across a generated range while
//! holding the others at the user's values:
//!
//! - [`generate_range`] turns a center value and a [`RangePolicy`] into a
//!   [`SweepRange`] of [`SWEEP_POINTS`] ascending values
//! - [`evaluate_sweep`] predicts the whole range in one batch
//! - [`analyze`] runs the single-point prediction and the three sweeps
//! - [`SensitivityChart`] is the data handed to whatever draws the lines

#![deny(unsafe_code)]

pub mod analysis;
pub mod chart;
pub mod error;
pub mod evaluator;
pub mod range;

pub use analysis::{analyze, SensitivityReport};
pub use chart::{ChartSeries, SensitivityChart};
pub use error::SweepError;
pub use evaluator::evaluate_sweep;
pub use range::{generate_range, RangePolicy, SweepRange, SWEEP_POINTS};
