//! Sweep range generation
//!
//! Every range has [`SWEEP_POINTS`] evenly spaced values, both endpoints
//! included, in ascending order. Policies only differ in how the endpoints
//! are derived from the center value.

use cropyield_types::{NumericFeature, TEMPERATURE_MAX, TEMPERATURE_MIN};
use serde::{Deserialize, Serialize};

/// Number of points in every sweep.
pub const SWEEP_POINTS: usize = 20;

/// How a sweep's endpoints are derived from the center value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangePolicy {
    /// From `low × center` to `high × center`.
    Multiplicative { low: f64, high: f64 },

    /// From `center - offset` to `center + offset`, clipped to the optional
    /// domain bounds.
    AdditiveBounded {
        offset: f64,
        lower: Option<f64>,
        upper: Option<f64>,
    },
}

impl RangePolicy {
    /// Rainfall: half to one and a half times the input.
    pub const RAINFALL: RangePolicy = RangePolicy::Multiplicative {
        low: 0.5,
        high: 1.5,
    };

    /// Temperature: ±10 °C inside the form's [-10, 50] domain.
    pub const TEMPERATURE: RangePolicy = RangePolicy::AdditiveBounded {
        offset: 10.0,
        lower: Some(TEMPERATURE_MIN as f64),
        upper: Some(TEMPERATURE_MAX as f64),
    };

    /// Pesticides: ±1 tonne, never below zero, no upper bound.
    pub const PESTICIDES: RangePolicy = RangePolicy::AdditiveBounded {
        offset: 1.0,
        lower: Some(0.0),
        upper: None,
    };

    /// The preset used when sweeping `feature`.
    pub fn for_feature(feature: NumericFeature) -> Self {
        match feature {
            NumericFeature::Rainfall => Self::RAINFALL,
            NumericFeature::Temperature => Self::TEMPERATURE,
            NumericFeature::Pesticides => Self::PESTICIDES,
        }
    }

    /// Endpoints `(start, end)` with `start <= end`.
    fn endpoints(self, center: f64) -> (f64, f64) {
        match self {
            RangePolicy::Multiplicative { low, high } => {
                let (a, b) = (center * low, center * high);
                (a.min(b), a.max(b))
            }
            RangePolicy::AdditiveBounded {
                offset,
                lower,
                upper,
            } => {
                // a center outside the domain is pulled onto its nearest edge
                let mut center = center;
                if let Some(lower) = lower {
                    center = center.max(lower);
                }
                if let Some(upper) = upper {
                    center = center.min(upper);
                }

                let start = lower.map_or(center - offset, |l| (center - offset).max(l));
                let end = upper.map_or(center + offset, |u| (center + offset).min(u));
                (start, end)
            }
        }
    }
}

/// Exactly [`SWEEP_POINTS`] ascending values, produced by [`generate_range`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRange {
    values: [f64; SWEEP_POINTS],
}

impl SweepRange {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn start(&self) -> f64 {
        self.values[0]
    }

    pub fn end(&self) -> f64 {
        self.values[SWEEP_POINTS - 1]
    }

    /// A zero-width range, e.g. a multiplicative sweep around zero. Valid output.
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// Generate the sweep range for `center` under `policy`.
///
/// Degenerate ranges (all points equal) are accepted, not errors.
pub fn generate_range(center: f64, policy: RangePolicy) -> SweepRange {
    let (start, end) = policy.endpoints(center);
    SweepRange {
        values: linspace(start, end),
    }
}

fn linspace(start: f64, end: f64) -> [f64; SWEEP_POINTS] {
    let step = (end - start) / (SWEEP_POINTS - 1) as f64;
    let mut values = [start; SWEEP_POINTS];
    for (i, value) in values.iter_mut().enumerate() {
        *value = start + i as f64 * step;
    }
    values[SWEEP_POINTS - 1] = end;
    values
}
