//! Artifact-backed polynomial regression pipeline
//!
//! The artifact is the serialized result of fitting, stored as JSON. It holds
//! everything needed to evaluate the fitted pipeline and nothing about how it
//! was fitted:
//!
//! 1. one-hot encoding of `item` and `area` against fixed vocabularies
//! 2. optional standardization of `[rainfall, pesticides, temperature]`
//! 3. polynomial expansion of the numeric triple (degree 1..=d, no bias)
//! 4. a linear model over the concatenated features
//!
//! Polynomial terms are ordered degree-major, and within a degree by the
//! lexicographic order of their variable-index combinations:
//! `x0, x1, x2, x0², x0·x1, x0·x2, x1², x1·x2, x2², ...`

use crate::contract::YieldModel;
use crate::error::{LoadError, LoadResult, ModelError, ModelResult};
use cropyield_types::FeatureRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Artifact format this crate can read.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Number of numeric inputs: rainfall, pesticides, temperature.
const NUMERIC_INPUTS: usize = 3;

const MAX_DEGREE: u32 = 8;

/// Serialized pipeline as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub format_version: u32,
    #[serde(default = "default_pipeline_name")]
    pub name: String,
    pub categories: CategoryVocabulary,
    pub numeric: NumericTransform,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Categories seen during fitting, in encoder column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVocabulary {
    pub item: Vec<String>,
    pub area: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTransform {
    pub degree: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<StandardScaler>,
}

/// Per-column `(x - mean) / scale`, applied before polynomial expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: [f64; NUMERIC_INPUTS],
    pub scale: [f64; NUMERIC_INPUTS],
}

fn default_pipeline_name() -> String {
    "crop_yield_pipeline".to_string()
}

impl PipelineArtifact {
    /// Number of coefficients a valid artifact must carry.
    pub fn expected_coefficients(&self) -> usize {
        self.categories.item.len()
            + self.categories.area.len()
            + polynomial_terms(NUMERIC_INPUTS, self.numeric.degree).len()
    }
}

/// A loaded, validated pipeline.
#[derive(Debug, Clone)]
pub struct PolynomialPipeline {
    name: String,
    items: HashMap<String, usize>,
    areas: HashMap<String, usize>,
    scaler: Option<StandardScaler>,
    terms: Vec<Vec<usize>>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl PolynomialPipeline {
    /// Read and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: PipelineArtifact =
            serde_json::from_str(&raw).map_err(|source| LoadError::Json {
                path: path.display().to_string(),
                source,
            })?;

        let pipeline = Self::from_artifact(artifact)?;
        info!(
            path = %path.display(),
            name = %pipeline.name,
            items = pipeline.items.len(),
            areas = pipeline.areas.len(),
            features = pipeline.coefficients.len(),
            "Loaded pipeline artifact"
        );
        Ok(pipeline)
    }

    /// Validate an in-memory artifact.
    pub fn from_artifact(artifact: PipelineArtifact) -> LoadResult<Self> {
        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(LoadError::InvalidArtifact(format!(
                "unsupported format_version {} (expected {})",
                artifact.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }

        let degree = artifact.numeric.degree;
        if !(1..=MAX_DEGREE).contains(&degree) {
            return Err(LoadError::InvalidArtifact(format!(
                "polynomial degree must be within 1..={}, got {}",
                MAX_DEGREE, degree
            )));
        }

        let items = index_vocabulary("item", &artifact.categories.item)?;
        let areas = index_vocabulary("area", &artifact.categories.area)?;

        if let Some(scaler) = &artifact.numeric.scaler {
            let usable = scaler.mean.iter().all(|m| m.is_finite())
                && scaler.scale.iter().all(|s| s.is_finite() && *s != 0.0);
            if !usable {
                return Err(LoadError::InvalidArtifact(
                    "scaler mean must be finite and scale finite and non-zero".to_string(),
                ));
            }
        }

        let expected = artifact.expected_coefficients();
        if artifact.coefficients.len() != expected {
            return Err(LoadError::InvalidArtifact(format!(
                "expected {} coefficients ({} items + {} areas + polynomial terms), got {}",
                expected,
                items.len(),
                areas.len(),
                artifact.coefficients.len()
            )));
        }

        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(LoadError::InvalidArtifact(
                "coefficients and intercept must be finite".to_string(),
            ));
        }

        Ok(Self {
            name: artifact.name,
            items,
            areas,
            scaler: artifact.numeric.scaler,
            terms: polynomial_terms(NUMERIC_INPUTS, degree),
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    /// Number of encoded features the linear model sees.
    pub fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    pub fn knows_item(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn knows_area(&self, area: &str) -> bool {
        self.areas.contains_key(area)
    }

    fn predict_record(&self, record: &FeatureRecord) -> ModelResult<f64> {
        let item = *self
            .items
            .get(&record.item)
            .ok_or_else(|| ModelError::UnknownCategory {
                field: "item",
                value: record.item.clone(),
            })?;
        let area = *self
            .areas
            .get(&record.area)
            .ok_or_else(|| ModelError::UnknownCategory {
                field: "area",
                value: record.area.clone(),
            })?;

        let mut x = [record.rainfall, record.pesticides, record.temperature];
        if let Some(scaler) = &self.scaler {
            for (i, value) in x.iter_mut().enumerate() {
                *value = (*value - scaler.mean[i]) / scaler.scale[i];
            }
        }

        // one-hot columns contribute exactly their own coefficient
        let numeric_offset = self.items.len() + self.areas.len();
        let mut y = self.intercept
            + self.coefficients[item]
            + self.coefficients[self.items.len() + area];

        for (k, term) in self.terms.iter().enumerate() {
            let feature: f64 = term.iter().map(|&v| x[v]).product();
            y += self.coefficients[numeric_offset + k] * feature;
        }

        Ok(y)
    }
}

impl YieldModel for PolynomialPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict_raw(&self, records: &[FeatureRecord]) -> ModelResult<Vec<f64>> {
        records.iter().map(|r| self.predict_record(r)).collect()
    }
}

fn index_vocabulary(field: &str, values: &[String]) -> LoadResult<HashMap<String, usize>> {
    if values.is_empty() {
        return Err(LoadError::InvalidArtifact(format!(
            "{} vocabulary is empty",
            field
        )));
    }

    let mut index = HashMap::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        if index.insert(value.clone(), i).is_some() {
            return Err(LoadError::InvalidArtifact(format!(
                "duplicate {} category: {}",
                field, value
            )));
        }
    }
    Ok(index)
}

/// Variable-index combinations (with replacement) for every degree 1..=degree.
fn polynomial_terms(n_vars: usize, degree: u32) -> Vec<Vec<usize>> {
    let mut terms = Vec::new();
    for d in 1..=degree as usize {
        let mut combo = Vec::with_capacity(d);
        push_combinations(n_vars, d, 0, &mut combo, &mut terms);
    }
    terms
}

fn push_combinations(
    n_vars: usize,
    remaining: usize,
    start: usize,
    combo: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(combo.clone());
        return;
    }
    for v in start..n_vars {
        combo.push(v);
        push_combinations(n_vars, remaining - 1, v, combo, out);
        combo.pop();
    }
}
