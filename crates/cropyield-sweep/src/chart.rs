//! Chart data for the sensitivity plot
//!
//! Only the data contract lives here. Drawing is the charting collaborator's
//! job.

use crate::analysis::SensitivityReport;
use cropyield_types::{NumericFeature, SweepResult};
use serde::{Deserialize, Serialize};

pub const X_AXIS_TITLE: &str = "Input Value";
pub const Y_AXIS_TITLE: &str = "Predicted Yield (tonnes)";

/// One line of the sensitivity plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: String,
    pub color: String,
    pub line_width: u32,
}

impl ChartSeries {
    pub fn from_sweep(sweep: &SweepResult) -> Self {
        Self {
            name: sweep.feature.label().to_string(),
            x: sweep.xs(),
            y: sweep.ys(),
            mode: "lines+markers".to_string(),
            color: series_color(sweep.feature).to_string(),
            line_width: 3,
        }
    }
}

/// The whole plot: a title, axis titles and one series per sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series: Vec<ChartSeries>,
}

impl SensitivityChart {
    pub fn from_report(report: &SensitivityReport) -> Self {
        Self {
            title: format!("Yield Sensitivity for {}", report.record.item),
            x_axis_title: X_AXIS_TITLE.to_string(),
            y_axis_title: Y_AXIS_TITLE.to_string(),
            series: report.sweeps.iter().map(ChartSeries::from_sweep).collect(),
        }
    }
}

fn series_color(feature: NumericFeature) -> &'static str {
    match feature {
        NumericFeature::Rainfall => "#e63946",
        NumericFeature::Temperature => "#2a9d8f",
        NumericFeature::Pesticides => "#f4a261",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropyield_types::{FeatureRecord, SweepPoint, YieldEstimate};

    fn sweep(feature: NumericFeature) -> SweepResult {
        SweepResult::new(
            feature,
            (0..3)
                .map(|i| SweepPoint {
                    input: f64::from(i),
                    estimate: YieldEstimate::clamp(f64::from(i) * 2.0),
                })
                .collect(),
        )
    }

    #[test]
    fn test_chart_from_report() {
        let report = SensitivityReport {
            record: FeatureRecord::new("Wheat", "Kenya", 600.0, 2.0, 18.0),
            prediction: YieldEstimate::clamp(123.0),
            sweeps: NumericFeature::ALL.into_iter().map(sweep).collect(),
        };

        let chart = SensitivityChart::from_report(&report);

        assert_eq!(chart.title, "Yield Sensitivity for Wheat");
        assert_eq!(chart.x_axis_title, "Input Value");
        assert_eq!(chart.y_axis_title, "Predicted Yield (tonnes)");
        assert_eq!(
            chart.series.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Rainfall", "Temperature", "Pesticides"]
        );

        let rain = &chart.series[0];
        assert_eq!(rain.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(rain.y, vec![0.0, 2.0, 4.0]);
        assert_eq!(rain.color, "#e63946");
        assert_eq!(rain.mode, "lines+markers");
        assert_eq!(chart.series[2].color, "#f4a261");
    }
}
