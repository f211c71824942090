//! Sweep results

use crate::estimate::YieldEstimate;
use crate::record::NumericFeature;
use serde::{Deserialize, Serialize};

/// One (input value, estimate) pair of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub input: f64,
    pub estimate: YieldEstimate,
}

/// Estimates obtained by varying one feature while holding the others fixed.
///
/// Points are kept in the order of the generated range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub feature: NumericFeature,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn new(feature: NumericFeature, points: Vec<SweepPoint>) -> Self {
        Self { feature, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Input values, the chart's x sequence.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.input).collect()
    }

    /// Clamped estimates, the chart's y sequence.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.estimate.value()).collect()
    }
}
