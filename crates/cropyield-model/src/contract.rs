//! Prediction contract
//!
//! [`YieldModel`] is the only capability the rest of the system needs from a
//! regression model. [`Predictor`] adds the post-conditions: one clamped
//! estimate per record, in input order.

use crate::error::{ModelError, ModelResult};
use cropyield_types::{FeatureRecord, YieldEstimate};
use std::sync::Arc;
use tracing::trace;

/// An opaque, pre-fitted yield model.
///
/// Implementations must be reentrant: a loaded model is shared read-only
/// between every request of the process.
pub trait YieldModel: Send + Sync {
    /// Short identifier used in logs and health output.
    fn name(&self) -> &str;

    /// Raw predictions, one per record, in record order.
    ///
    /// Fails with [`ModelError::UnknownCategory`] when a record carries an
    /// item or area outside the model's vocabulary.
    fn predict_raw(&self, records: &[FeatureRecord]) -> ModelResult<Vec<f64>>;
}

/// Shared handle enforcing the prediction contract on top of a [`YieldModel`].
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn YieldModel>,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.model.name())
            .finish()
    }
}

impl Predictor {
    pub fn new(model: Arc<dyn YieldModel>) -> Self {
        Self { model }
    }

    pub fn from_model<M: YieldModel + 'static>(model: M) -> Self {
        Self::new(Arc::new(model))
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Predict a batch with a single model invocation.
    ///
    /// Every returned estimate is `max(raw, 0)`. A failure anywhere in the
    /// batch fails the whole call.
    pub fn predict(&self, records: &[FeatureRecord]) -> ModelResult<Vec<YieldEstimate>> {
        if records.is_empty() {
            return Err(ModelError::EmptyBatch);
        }

        let raw = self.model.predict_raw(records)?;
        if raw.len() != records.len() {
            return Err(ModelError::OutputShape {
                expected: records.len(),
                actual: raw.len(),
            });
        }

        trace!(model = self.model.name(), batch = records.len(), "model invoked");

        raw.into_iter()
            .enumerate()
            .map(|(index, value)| {
                if value.is_finite() {
                    Ok(YieldEstimate::clamp(value))
                } else {
                    Err(ModelError::NonFiniteOutput { index })
                }
            })
            .collect()
    }

    /// Predict a single record.
    pub fn predict_one(&self, record: &FeatureRecord) -> ModelResult<YieldEstimate> {
        let estimates = self.predict(std::slice::from_ref(record))?;
        estimates.into_iter().next().ok_or(ModelError::OutputShape {
            expected: 1,
            actual: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns `rainfall - offset`, so negative outputs are easy to provoke.
    struct ShiftModel {
        offset: f64,
    }

    impl YieldModel for ShiftModel {
        fn name(&self) -> &str {
            "shift"
        }

        fn predict_raw(&self, records: &[FeatureRecord]) -> ModelResult<Vec<f64>> {
            Ok(records.iter().map(|r| r.rainfall - self.offset).collect())
        }
    }

    /// Returns a fixed output vector regardless of input.
    struct FixedModel(Vec<f64>);

    impl YieldModel for FixedModel {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict_raw(&self, _records: &[FeatureRecord]) -> ModelResult<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    fn record(rainfall: f64) -> FeatureRecord {
        FeatureRecord::new("Maize", "India", rainfall, 10.0, 25.0)
    }

    #[test]
    fn test_negative_outputs_clamped() {
        let predictor = Predictor::from_model(ShiftModel { offset: 100.0 });
        let records = vec![record(50.0), record(100.0), record(150.0)];

        let estimates = predictor.predict(&records).unwrap();
        let values: Vec<f64> = estimates.iter().map(|e| e.value()).collect();
        assert_eq!(values, vec![0.0, 0.0, 50.0]);
    }

    #[test]
    fn test_order_preserved() {
        let predictor = Predictor::from_model(ShiftModel { offset: 0.0 });
        let records: Vec<_> = (0..20).map(|i| record(f64::from(i) * 3.0)).collect();

        let estimates = predictor.predict(&records).unwrap();
        for (record, estimate) in records.iter().zip(&estimates) {
            assert_eq!(estimate.value(), record.rainfall);
        }
    }

    #[test]
    fn test_predict_one_is_idempotent() {
        let predictor = Predictor::from_model(ShiftModel { offset: 12.5 });
        let r = record(80.0);
        assert_eq!(
            predictor.predict_one(&r).unwrap(),
            predictor.predict_one(&r).unwrap()
        );
    }

    #[test]
    fn test_empty_batch_rejected() {
        let predictor = Predictor::from_model(ShiftModel { offset: 0.0 });
        assert_eq!(predictor.predict(&[]), Err(ModelError::EmptyBatch));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let predictor = Predictor::from_model(FixedModel(vec![1.0]));
        let err = predictor.predict(&[record(1.0), record(2.0)]).unwrap_err();
        assert_eq!(
            err,
            ModelError::OutputShape {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_non_finite_output_rejected() {
        let predictor = Predictor::from_model(FixedModel(vec![1.0, f64::NAN]));
        let err = predictor.predict(&[record(1.0), record(2.0)]).unwrap_err();
        assert_eq!(err, ModelError::NonFiniteOutput { index: 1 });
    }

    #[test]
    fn test_debug_shows_model_name() {
        let predictor = Predictor::from_model(FixedModel(vec![]));
        assert_eq!(format!("{:?}", predictor), "Predictor { model: \"fixed\" }");
    }
}
