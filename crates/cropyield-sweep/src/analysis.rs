//! Predict-and-sweep for one user action

use crate::error::SweepError;
use crate::evaluator::evaluate_sweep;
use crate::range::{generate_range, RangePolicy};
use cropyield_model::Predictor;
use cropyield_types::{FeatureRecord, NumericFeature, SweepResult, YieldEstimate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything one predict action produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub record: FeatureRecord,
    pub prediction: YieldEstimate,
    /// Rainfall, temperature and pesticides sweeps, in that order
    pub sweeps: Vec<SweepResult>,
}

impl SensitivityReport {
    pub fn sweep(&self, feature: NumericFeature) -> Option<&SweepResult> {
        self.sweeps.iter().find(|s| s.feature == feature)
    }
}

/// Run the single-point prediction, then one sweep per numeric feature,
/// centered on the record's own value.
///
/// The four model invocations run sequentially. The first failure aborts the
/// whole analysis.
#[instrument(skip(predictor, record), fields(item = %record.item, area = %record.area))]
pub fn analyze(
    predictor: &Predictor,
    record: &FeatureRecord,
) -> Result<SensitivityReport, SweepError> {
    let prediction = predictor.predict_one(record)?;
    info!(prediction = prediction.value(), "Predicted yield");

    let sweeps = NumericFeature::ALL
        .into_iter()
        .map(|feature| {
            let range = generate_range(record.value(feature), RangePolicy::for_feature(feature));
            evaluate_sweep(predictor, record, feature, &range)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SensitivityReport {
        record: record.clone(),
        prediction,
        sweeps,
    })
}
