//! Batched sweep evaluation

use crate::error::SweepError;
use crate::range::SweepRange;
use cropyield_model::Predictor;
use cropyield_types::{FeatureRecord, NumericFeature, SweepPoint, SweepResult};
use tracing::debug;

/// Predict `base` with `feature` replaced by every value of `range`.
///
/// The whole range goes to the model in one batch, so all points reflect the
/// same model state. If the batch fails, no points are returned.
pub fn evaluate_sweep(
    predictor: &Predictor,
    base: &FeatureRecord,
    feature: NumericFeature,
    range: &SweepRange,
) -> Result<SweepResult, SweepError> {
    let batch: Vec<FeatureRecord> = range.iter().map(|v| base.with_value(feature, v)).collect();
    let estimates = predictor.predict(&batch)?;

    debug!(
        feature = %feature,
        start = range.start(),
        end = range.end(),
        points = estimates.len(),
        "Sweep evaluated"
    );

    let points = range
        .iter()
        .zip(estimates)
        .map(|(input, estimate)| SweepPoint { input, estimate })
        .collect();

    Ok(SweepResult::new(feature, points))
}
