//! Feature records exchanged with the yield model

use serde::{Deserialize, Serialize};

/// One fully-populated input tuple for the yield model.
///
/// There are no optional fields: a record that reaches the model always
/// carries all five features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Crop name
    pub item: String,
    /// Region name
    pub area: String,
    /// Average rainfall in mm/year
    pub rainfall: f64,
    /// Pesticides used in tonnes
    pub pesticides: f64,
    /// Average temperature in °C
    pub temperature: f64,
}

impl FeatureRecord {
    pub fn new(
        item: impl Into<String>,
        area: impl Into<String>,
        rainfall: f64,
        pesticides: f64,
        temperature: f64,
    ) -> Self {
        Self {
            item: item.into(),
            area: area.into(),
            rainfall,
            pesticides,
            temperature,
        }
    }

    /// Current value of a numeric feature.
    pub fn value(&self, feature: NumericFeature) -> f64 {
        match feature {
            NumericFeature::Rainfall => self.rainfall,
            NumericFeature::Temperature => self.temperature,
            NumericFeature::Pesticides => self.pesticides,
        }
    }

    /// Copy of this record with one numeric feature replaced.
    pub fn with_value(&self, feature: NumericFeature, value: f64) -> Self {
        let mut record = self.clone();
        match feature {
            NumericFeature::Rainfall => record.rainfall = value,
            NumericFeature::Temperature => record.temperature = value,
            NumericFeature::Pesticides => record.pesticides = value,
        }
        record
    }
}

/// A numeric feature that a sensitivity sweep can vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFeature {
    Rainfall,
    Temperature,
    Pesticides,
}

impl NumericFeature {
    /// Sweep order used by the sensitivity analysis.
    pub const ALL: [NumericFeature; 3] = [
        NumericFeature::Rainfall,
        NumericFeature::Temperature,
        NumericFeature::Pesticides,
    ];

    /// Human label used for chart series and table headers.
    pub fn label(self) -> &'static str {
        match self {
            NumericFeature::Rainfall => "Rainfall",
            NumericFeature::Temperature => "Temperature",
            NumericFeature::Pesticides => "Pesticides",
        }
    }

    /// Unit of the feature's input values.
    pub fn unit(self) -> &'static str {
        match self {
            NumericFeature::Rainfall => "mm/year",
            NumericFeature::Temperature => "°C",
            NumericFeature::Pesticides => "tonnes",
        }
    }
}

impl std::fmt::Display for NumericFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NumericFeature::Rainfall => "rainfall",
            NumericFeature::Temperature => "temperature",
            NumericFeature::Pesticides => "pesticides",
        };
        write!(f, "{}", name)
    }
}
