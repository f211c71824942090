//! Clamped yield estimates

use serde::{Deserialize, Serialize};

/// Unit label shown next to every estimate.
pub const YIELD_UNIT: &str = "tonnes /area";

/// A non-negative predicted yield.
///
/// The only constructor is [`YieldEstimate::clamp`], so a negative estimate
/// cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct YieldEstimate(f64);

impl YieldEstimate {
    /// Clamp a raw model output to `max(raw, 0)`.
    pub fn clamp(raw: f64) -> Self {
        Self(raw.max(0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Two-decimal rendering with the unit label, e.g. `"1234.50 tonnes /area"`.
    pub fn formatted(self) -> String {
        format!("{:.2} {}", self.0, YIELD_UNIT)
    }
}

impl<'de> Deserialize<'de> for YieldEstimate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::clamp)
    }
}

impl std::fmt::Display for YieldEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
