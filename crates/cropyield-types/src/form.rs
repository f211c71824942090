//! Input form contract
//!
//! The interactive surface offers a crop and a region from finite lists, two
//! non-negative numbers and an integer temperature slider. Omitted numbers
//! fall back to defaults derived from the reference dataset.

use crate::record::FeatureRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest temperature the form accepts (°C).
pub const TEMPERATURE_MIN: i32 = -10;

/// Highest temperature the form accepts (°C).
pub const TEMPERATURE_MAX: i32 = 50;

/// Highest rainfall the form accepts (mm/year). The rainfall sweep reaches
/// 1.5 times the submitted value, which must stay finite.
pub const RAINFALL_MAX: f64 = f64::MAX / 2.0;

/// Values submitted by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputForm {
    pub item: String,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pesticides: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}

/// Pre-filled values for the numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub rainfall: f64,
    pub pesticides: f64,
    pub temperature: i32,
}

/// Choices the form may offer, derived from the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Sorted, unique crop names
    pub items: Vec<String>,
    /// Sorted, unique region names
    pub areas: Vec<String>,
    pub defaults: FormDefaults,
}

/// Rejected form input. Raised before any model call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("unknown area: {0}")]
    UnknownArea(String),

    #[error("rainfall must be within [0, {max:e}] mm/year, got {0}", max = RAINFALL_MAX)]
    InvalidRainfall(f64),

    #[error("pesticides must be a finite value >= 0, got {0}")]
    InvalidPesticides(f64),

    #[error("temperature must be within [{min}, {max}] °C, got {value}")]
    TemperatureOutOfRange { value: i32, min: i32, max: i32 },
}

impl FormOptions {
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn has_area(&self, area: &str) -> bool {
        self.areas.iter().any(|a| a == area)
    }
}

impl InputForm {
    pub fn new(item: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            area: area.into(),
            ..Default::default()
        }
    }

    pub fn with_rainfall(mut self, rainfall: f64) -> Self {
        self.rainfall = Some(rainfall);
        self
    }

    pub fn with_pesticides(mut self, pesticides: f64) -> Self {
        self.pesticides = Some(pesticides);
        self
    }

    pub fn with_temperature(mut self, temperature: i32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Fill omitted values from `options.defaults`, validate, and build the
    /// record handed to the model.
    pub fn resolve(&self, options: &FormOptions) -> Result<FeatureRecord, FormError> {
        if !options.has_item(&self.item) {
            return Err(FormError::UnknownItem(self.item.clone()));
        }
        if !options.has_area(&self.area) {
            return Err(FormError::UnknownArea(self.area.clone()));
        }

        let rainfall = self.rainfall.unwrap_or(options.defaults.rainfall);
        if !(0.0..=RAINFALL_MAX).contains(&rainfall) {
            return Err(FormError::InvalidRainfall(rainfall));
        }

        let pesticides = self.pesticides.unwrap_or(options.defaults.pesticides);
        if !(pesticides.is_finite() && pesticides >= 0.0) {
            return Err(FormError::InvalidPesticides(pesticides));
        }

        let temperature = self.temperature.unwrap_or(options.defaults.temperature);
        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
            return Err(FormError::TemperatureOutOfRange {
                value: temperature,
                min: TEMPERATURE_MIN,
                max: TEMPERATURE_MAX,
            });
        }

        Ok(FeatureRecord::new(
            self.item.clone(),
            self.area.clone(),
            rainfall,
            pesticides,
            f64::from(temperature),
        ))
    }
}
