//! Reference dataset
//!
//! The historical yield table is never used for prediction. It only tells the
//! form which crops and regions to offer and what to pre-fill.

use crate::error::{LoadError, LoadResult};
use cropyield_types::{FormDefaults, FormOptions, TEMPERATURE_MAX, TEMPERATURE_MIN};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Columns read from each row; any other column is ignored.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "Area")]
    area: String,
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "average_rain_fall_mm_per_year")]
    rainfall: Option<f64>,
    #[serde(rename = "pesticides_tonnes")]
    pesticides: Option<f64>,
    #[serde(rename = "avg_temp")]
    temperature: Option<f64>,
}

/// Mean over the cells that hold a value. Blank cells are skipped.
#[derive(Debug, Default)]
struct ColumnMean {
    sum: f64,
    count: usize,
}

impl ColumnMean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn finish(&self, source: &str, column: &'static str) -> LoadResult<f64> {
        if self.count == 0 {
            return Err(LoadError::MissingValues {
                path: source.to_string(),
                column,
            });
        }
        Ok(self.sum / self.count as f64)
    }
}

/// Option lists and defaults derived from the reference table.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: usize,
    options: FormOptions,
}

impl ReferenceDataset {
    /// Load a CSV file with a header row.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let dataset = Self::from_reader(file, &path.display().to_string())?;
        info!(
            path = %path.display(),
            rows = dataset.rows,
            items = dataset.options.items.len(),
            areas = dataset.options.areas.len(),
            "Loaded reference dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV from any reader. `source` names the input in errors.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> LoadResult<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut items = BTreeSet::new();
        let mut areas = BTreeSet::new();
        let mut rainfall = ColumnMean::default();
        let mut pesticides = ColumnMean::default();
        let mut temperature = ColumnMean::default();
        let mut rows = 0usize;

        for result in reader.deserialize::<DatasetRow>() {
            let row = result.map_err(|err| LoadError::Csv {
                path: source.to_string(),
                source: err,
            })?;
            items.insert(row.item);
            areas.insert(row.area);
            rainfall.push(row.rainfall);
            pesticides.push(row.pesticides);
            temperature.push(row.temperature);
            rows += 1;
        }

        if rows == 0 {
            return Err(LoadError::EmptyDataset(source.to_string()));
        }

        let mean_temperature = temperature.finish(source, "avg_temp")?;
        let defaults = FormDefaults {
            rainfall: rainfall.finish(source, "average_rain_fall_mm_per_year")?,
            pesticides: pesticides.finish(source, "pesticides_tonnes")?,
            // the slider takes whole degrees; truncate like an integer cast
            temperature: (mean_temperature.trunc() as i32).clamp(TEMPERATURE_MIN, TEMPERATURE_MAX),
        };

        Ok(Self {
            rows,
            options: FormOptions {
                items: items.into_iter().collect(),
                areas: areas.into_iter().collect(),
                defaults,
            },
        })
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn items(&self) -> &[String] {
        &self.options.items
    }

    pub fn areas(&self) -> &[String] {
        &self.options.areas
    }

    pub fn defaults(&self) -> FormDefaults {
        self.options.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,Area,Item,Year,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
0,Albania,Maize,1990,36613,1485.0,121.0,16.37
1,Albania,Potatoes,1990,66667,1485.0,121.0,16.37
2,India,Maize,1991,15000,1083.0,75000.0,26.55
3,India,\"Rice, paddy\",1991,26000,1083.0,75000.0,26.55
";

    #[test]
    fn test_options_sorted_and_unique() {
        let dataset = ReferenceDataset::from_reader(SAMPLE.as_bytes(), "sample").unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.items(), ["Maize", "Potatoes", "Rice, paddy"]);
        assert_eq!(dataset.areas(), ["Albania", "India"]);
    }

    #[test]
    fn test_defaults_are_column_means() {
        let dataset = ReferenceDataset::from_reader(SAMPLE.as_bytes(), "sample").unwrap();
        let defaults = dataset.defaults();

        assert!((defaults.rainfall - 1284.0).abs() < 1e-9);
        assert!((defaults.pesticides - 37560.5).abs() < 1e-9);
        // mean 21.46 truncates to 21
        assert_eq!(defaults.temperature, 21);
    }

    #[test]
    fn test_negative_mean_temperature_truncates_toward_zero() {
        let csv = "\
Area,Item,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
Greenland,Barley,200,1,-3.8
";
        let dataset = ReferenceDataset::from_reader(csv.as_bytes(), "cold").unwrap();
        assert_eq!(dataset.defaults().temperature, -3);
    }

    #[test]
    fn test_blank_cells_are_skipped_in_means() {
        let csv = "\
Area,Item,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
Kenya,Maize,600,,19.5
Kenya,Wheat,,4.0,
India,Maize,1200,2.0,25.5
";
        let dataset = ReferenceDataset::from_reader(csv.as_bytes(), "gaps.csv").unwrap();
        let defaults = dataset.defaults();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.items(), ["Maize", "Wheat"]);
        assert!((defaults.rainfall - 900.0).abs() < 1e-9);
        assert!((defaults.pesticides - 3.0).abs() < 1e-9);
        // mean 22.5 truncates to 22
        assert_eq!(defaults.temperature, 22);
    }

    #[test]
    fn test_column_without_values_is_load_failure() {
        let csv = "\
Area,Item,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
Kenya,Maize,600,,19.5
India,Maize,1200,,25.5
";
        let err = ReferenceDataset::from_reader(csv.as_bytes(), "gaps.csv").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingValues { column: "pesticides_tonnes", .. }
        ));
    }

    #[test]
    fn test_empty_dataset_is_load_failure() {
        let csv = "Area,Item,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp\n";
        let err = ReferenceDataset::from_reader(csv.as_bytes(), "empty.csv").unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset(ref name) if name == "empty.csv"));
    }

    #[test]
    fn test_missing_column_is_load_failure() {
        let csv = "Area,Item,avg_temp\nIndia,Maize,25\n";
        let err = ReferenceDataset::from_reader(csv.as_bytes(), "broken.csv").unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }

    #[test]
    fn test_missing_file_is_load_failure() {
        let err = ReferenceDataset::load("/nonexistent/yield_df.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
